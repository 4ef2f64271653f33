//! Row filtering and type normalization over curated corpora.
use std::path::Path;

use crate::error::Error;
use crate::ops::{CuratedRecord, FilterRows, NormalizeTypes};

use super::{column_index, TweetCsv};

impl FilterRows for TweetCsv {
    fn filter_rows(src: &Path, dst: &Path) -> Result<(), Error> {
        let mut rdr = csv::Reader::from_path(src)?;
        let headers = rdr.headers()?.clone();
        let target_col = column_index(&headers, "target")?;

        let mut kept: Vec<csv::StringRecord> = Vec::new();
        let mut dropped = 0usize;
        for (idx, record) in rdr.records().enumerate() {
            let record = record?;
            let row = idx + 1;
            let target: i64 = record
                .get(target_col)
                .unwrap_or("")
                .trim()
                .parse()
                .map_err(|_| Error::MalformedInput {
                    row,
                    field: "target",
                })?;
            if target != 0 {
                kept.push(record);
            } else {
                dropped += 1;
            }
        }

        // the input is fully read by now, dst == src is safe
        drop(rdr);
        let mut wtr = csv::Writer::from_path(dst)?;
        wtr.write_record(&headers)?;
        for record in &kept {
            wtr.write_record(record)?;
        }
        wtr.flush()?;

        info!("kept {} rows, dropped {} non-disaster rows", kept.len(), dropped);
        Ok(())
    }
}

impl NormalizeTypes for TweetCsv {
    fn normalize_types(src: &Path, has_headers: bool) -> Result<Vec<CuratedRecord>, Error> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(has_headers)
            .from_path(src)?;
        let (text_col, label_col) = if has_headers {
            let headers = rdr.headers()?;
            (column_index(headers, "text")?, column_index(headers, "label")?)
        } else {
            // headerless curated corpus: text,label by position
            (0, 1)
        };

        let mut rows = Vec::new();
        for (idx, record) in rdr.records().enumerate() {
            let record = record?;
            let row = idx + 1;
            let text = record.get(text_col).ok_or(Error::MalformedInput {
                row,
                field: "text",
            })?;
            let label = record.get(label_col).ok_or(Error::MalformedInput {
                row,
                field: "label",
            })?;
            rows.push(CuratedRecord {
                text: text.to_string(),
                label: label.to_string(),
            });
        }

        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use std::fs::File;
    use std::io::Write;

    use tempfile::tempdir;

    use crate::error::Error;
    use crate::impls::TweetCsv;
    use crate::ops::{FilterRows, NormalizeTypes};

    fn write_corpus(path: &std::path::Path, contents: &str) {
        let mut f = File::create(path).unwrap();
        f.write_all(contents.as_bytes()).unwrap();
    }

    #[test]
    fn drops_target_zero_rows() {
        let dir = tempdir().unwrap();
        let src = dir.path().join("tweets.csv");
        let dst = dir.path().join("filtered.csv");
        write_corpus(
            &src,
            "id,keyword,text,target\n\
             1,aftershock,tremors,1\n\
             2,ablaze,just a sunset,0\n\
             3,flooding,river broke the banks,1\n",
        );

        TweetCsv::filter_rows(&src, &dst).unwrap();

        let filtered = std::fs::read_to_string(&dst).unwrap();
        assert_eq!(
            filtered,
            "id,keyword,text,target\n\
             1,aftershock,tremors,1\n\
             3,flooding,river broke the banks,1\n"
        );
    }

    #[test]
    fn in_place_overwrite() {
        let dir = tempdir().unwrap();
        let src = dir.path().join("tweets.csv");
        write_corpus(
            &src,
            "id,keyword,text,target\n1,aftershock,tremors,1\n2,ablaze,sunset,0\n",
        );

        TweetCsv::filter_rows(&src, &src).unwrap();

        let filtered = std::fs::read_to_string(&src).unwrap();
        assert_eq!(filtered, "id,keyword,text,target\n1,aftershock,tremors,1\n");
    }

    #[test]
    fn filtering_is_idempotent() {
        let dir = tempdir().unwrap();
        let src = dir.path().join("tweets.csv");
        write_corpus(
            &src,
            "id,keyword,text,target\n1,aftershock,tremors,1\n2,ablaze,sunset,0\n",
        );

        TweetCsv::filter_rows(&src, &src).unwrap();
        let first = std::fs::read_to_string(&src).unwrap();
        TweetCsv::filter_rows(&src, &src).unwrap();
        let second = std::fs::read_to_string(&src).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn empty_table_yields_empty_output() {
        let dir = tempdir().unwrap();
        let src = dir.path().join("tweets.csv");
        let dst = dir.path().join("filtered.csv");
        write_corpus(&src, "id,keyword,text,target\n");

        TweetCsv::filter_rows(&src, &dst).unwrap();

        let filtered = std::fs::read_to_string(&dst).unwrap();
        assert_eq!(filtered, "id,keyword,text,target\n");
    }

    #[test]
    fn missing_target_column() {
        let dir = tempdir().unwrap();
        let src = dir.path().join("tweets.csv");
        write_corpus(&src, "id,keyword,text\n1,aftershock,tremors\n");

        match TweetCsv::filter_rows(&src, &dir.path().join("out.csv")) {
            Err(Error::Schema { column }) => assert_eq!(column, "target"),
            other => panic!("expected schema error, got {:?}", other),
        }
    }

    #[test]
    fn non_numeric_target_aborts() {
        let dir = tempdir().unwrap();
        let src = dir.path().join("tweets.csv");
        write_corpus(
            &src,
            "id,keyword,text,target\n1,aftershock,tremors,1\n2,ablaze,sunset,maybe\n",
        );

        match TweetCsv::filter_rows(&src, &dir.path().join("out.csv")) {
            Err(Error::MalformedInput { row, field }) => {
                assert_eq!(row, 2);
                assert_eq!(field, "target");
            }
            other => panic!("expected malformed input, got {:?}", other),
        }
    }

    #[test]
    fn types_from_headered_corpus() {
        let dir = tempdir().unwrap();
        let src = dir.path().join("cleaned.csv");
        write_corpus(
            &src,
            "text,label,target\ntremors,Earthquake,1\nno rain,Drought,1\n",
        );

        let rows = TweetCsv::normalize_types(&src, true).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].text, "tremors");
        assert_eq!(rows[0].label, "Earthquake");
        assert_eq!(rows[1].label, "Drought");
    }

    #[test]
    fn types_from_headerless_corpus() {
        let dir = tempdir().unwrap();
        let src = dir.path().join("disaster_text.csv");
        write_corpus(&src, "forest burning near town,Wild Fire\n");

        let rows = TweetCsv::normalize_types(&src, false).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].text, "forest burning near town");
        assert_eq!(rows[0].label, "Wild Fire");
    }

    #[test]
    fn types_are_stable_across_reruns() {
        let dir = tempdir().unwrap();
        let src = dir.path().join("cleaned.csv");
        write_corpus(&src, "text,label\ntremors,Earthquake\n");

        let first = TweetCsv::normalize_types(&src, true).unwrap();
        let second = TweetCsv::normalize_types(&src, true).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn types_missing_label_column() {
        let dir = tempdir().unwrap();
        let src = dir.path().join("cleaned.csv");
        write_corpus(&src, "text,target\ntremors,1\n");

        match TweetCsv::normalize_types(&src, true) {
            Err(Error::Schema { column }) => assert_eq!(column, "label"),
            other => panic!("expected schema error, got {:?}", other),
        }
    }
}
