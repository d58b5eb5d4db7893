use crate::tracklist::loader::error::{LoaderError, LoaderResult};
use crate::tracklist::models::{TracklistEntry, TrackRecord};
use log::debug;
use std::path::{Path, PathBuf};

pub mod error;

/// Parses a tracklist source document into chronologically sorted entries.
///
/// The document syntax is selected by file extension: ".yaml"/".yml" parse
/// as a timestamp-keyed YAML mapping, anything else as a CSV table with a
/// timestamp,title,artist,label header row.
pub struct TracklistLoader {
    input_path: PathBuf,
}

impl TracklistLoader {
    pub fn new(input_path: impl AsRef<Path>) -> Self {
        Self {
            input_path: input_path.as_ref().to_path_buf(),
        }
    }

    /// Reads and parses the document, then sorts the entries by their
    /// derived seconds. The sort is stable, so entries with equal (or
    /// unparsable, zero-normalized) timestamps keep their input order.
    pub async fn load(&self) -> LoaderResult<Vec<TracklistEntry>> {
        let data = tokio::fs::read_to_string(&self.input_path).await?;

        let mut entries = if self.has_yaml_extension() {
            debug!("Parsing YAML tracklist: {:?}", self.input_path);
            parse_yaml(&data)?
        } else {
            debug!("Parsing CSV tracklist: {:?}", self.input_path);
            parse_csv(&data)?
        };

        entries.sort_by_key(TracklistEntry::seconds);

        Ok(entries)
    }

    fn has_yaml_extension(&self) -> bool {
        self.input_path
            .extension()
            .and_then(|s| s.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"))
    }
}

fn parse_yaml(data: &str) -> LoaderResult<Vec<TracklistEntry>> {
    let mapping: serde_yaml::Mapping = serde_yaml::from_str(data)?;

    let mut entries = Vec::with_capacity(mapping.len());
    for (key, value) in mapping {
        let timestamp = match key {
            serde_yaml::Value::String(timestamp) => timestamp,
            serde_yaml::Value::Number(number) => number.to_string(),
            other => return Err(LoaderError::InvalidTimestampKey(format!("{other:?}"))),
        };
        let record: TrackRecord = serde_yaml::from_value(value)?;

        entries.push(TracklistEntry { timestamp, record });
    }

    Ok(entries)
}

fn parse_csv(data: &str) -> LoaderResult<Vec<TracklistEntry>> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(data.as_bytes());

    let headers = reader.headers()?.clone();
    let column_of = |name: &str| headers.iter().position(|header| header.eq_ignore_ascii_case(name));

    let timestamp_column = column_of("timestamp").ok_or(LoaderError::MissingColumn("timestamp"))?;
    let title_column = column_of("title").ok_or(LoaderError::MissingColumn("title"))?;
    let artist_column = column_of("artist");
    let label_column = column_of("label");

    let mut entries = Vec::new();
    for (index, row) in reader.records().enumerate() {
        let row = row?;
        let field = |column: Option<usize>| {
            column
                .and_then(|column| row.get(column))
                .filter(|value| !value.is_empty())
                .map(str::to_string)
        };

        // Rows short of optional columns are tolerated; an absent timestamp
        // zero-normalizes downstream like any other unparsable timestamp.
        let timestamp = field(Some(timestamp_column)).unwrap_or_default();
        let title = field(Some(title_column)).ok_or(LoaderError::MissingTitle(index + 1))?;

        entries.push(TracklistEntry {
            timestamp,
            record: TrackRecord {
                title,
                artist: field(artist_column),
                label: field(label_column),
            },
        });
    }

    Ok(entries)
}
