//! Record segmenter: turns cleaned lines or blocks into sealed contacts

use crate::classify::FieldClassifier;
use crate::patterns;
use rollcall_domain::{CandidateRecord, ContactField, ContactRecord};
use tracing::debug;

/// Per-line state machine state
#[derive(Debug)]
enum SegmentState {
    NoActiveRecord,
    AccumulatingRecord(CandidateRecord),
}

/// Splits cleaned text into contact records
pub struct RecordSegmenter<'a> {
    classifier: FieldClassifier<'a>,
}

impl<'a> RecordSegmenter<'a> {
    /// Create a segmenter that classifies with `classifier`
    pub fn new(classifier: FieldClassifier<'a>) -> Self {
        Self { classifier }
    }

    /// Per-line state machine
    ///
    /// A whole-line capitalized name (that is not itself a title) starts a
    /// new record, sealing the current one if it already has a name. Other
    /// lines feed the current record. At end of input the current record is
    /// sealed if it has a name.
    pub fn segment_lines<S: AsRef<str>>(&self, lines: &[S]) -> Vec<ContactRecord> {
        let mut sealed = Vec::new();
        let mut state = SegmentState::NoActiveRecord;

        for line in lines.iter().map(|l| l.as_ref().trim()) {
            state = if self.is_name_trigger(line) {
                match state {
                    SegmentState::AccumulatingRecord(record) if record.has_name() => {
                        sealed.push(record.seal());
                        SegmentState::AccumulatingRecord(Self::named(line))
                    }
                    SegmentState::AccumulatingRecord(mut record) => {
                        record.fill(ContactField::Name, line);
                        SegmentState::AccumulatingRecord(record)
                    }
                    SegmentState::NoActiveRecord => {
                        SegmentState::AccumulatingRecord(Self::named(line))
                    }
                }
            } else {
                let mut record = match state {
                    SegmentState::AccumulatingRecord(record) => record,
                    SegmentState::NoActiveRecord => CandidateRecord::new(),
                };
                self.classifier.classify_line(line, &mut record);
                if record.is_empty() {
                    SegmentState::NoActiveRecord
                } else {
                    SegmentState::AccumulatingRecord(record)
                }
            };
        }

        if let SegmentState::AccumulatingRecord(record) = state {
            Self::seal_if_named(record, &mut sealed);
        }

        debug!("Line segmentation sealed {} records", sealed.len());
        sealed
    }

    /// Every line is its own candidate record
    pub fn segment_per_line<S: AsRef<str>>(&self, lines: &[S]) -> Vec<ContactRecord> {
        let mut sealed = Vec::new();
        for line in lines {
            let mut record = CandidateRecord::new();
            self.classifier.classify_line(line.as_ref(), &mut record);
            Self::seal_if_named(record, &mut sealed);
        }
        debug!(
            "Per-line segmentation sealed {} of {} lines",
            sealed.len(),
            lines.len()
        );
        sealed
    }

    /// One candidate record per block
    pub fn segment_blocks<S: AsRef<str>>(&self, blocks: &[Vec<S>]) -> Vec<ContactRecord> {
        let mut sealed = Vec::new();
        for block in blocks {
            let text = block
                .iter()
                .map(|l| l.as_ref())
                .collect::<Vec<_>>()
                .join("\n");
            let mut record = CandidateRecord::new();
            self.classifier.classify_block(&text, &mut record);
            Self::seal_if_named(record, &mut sealed);
        }
        debug!(
            "Block segmentation sealed {} of {} blocks",
            sealed.len(),
            blocks.len()
        );
        sealed
    }

    fn is_name_trigger(&self, line: &str) -> bool {
        patterns::is_name_line(line) && !self.classifier.is_title_line(line)
    }

    fn named(line: &str) -> CandidateRecord {
        let mut record = CandidateRecord::new();
        record.fill(ContactField::Name, line);
        record
    }

    fn seal_if_named(record: CandidateRecord, sealed: &mut Vec<ContactRecord>) {
        if record.has_name() {
            sealed.push(record.seal());
        } else if !record.is_empty() {
            debug!("Discarding unnamed record: {:?}", record);
        }
    }
}
