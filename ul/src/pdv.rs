//! PDV reassembly.
//!
//! This module turns a sequence of presentation data values (PDVs),
//! as carried by P-DATA-TF PDUs, back into contiguous command or
//! payload datasets. It is the receive-side counterpart of
//! [`crate::association::pdata::PDataWriter`], which performs the
//! equivalent fragmentation on the way out.

use snafu::{ensure, Snafu};

use crate::pdu::{PDataValue, PDataValueType};

/// An error occurring while reassembling data set fragments.
#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum Error {
    #[snafu(display("fragments for a single message came from different presentation contexts ({first} and {other})"))]
    MixedPresentationContext { first: u8, other: u8 },

    #[snafu(display("reassembly requested on an empty fragment queue"))]
    Empty,
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// A fully reassembled command or data set, still as raw bytes,
/// together with the presentation context it arrived on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReassembledDataSet {
    /// The presentation context ID shared by all of the fragments.
    pub presentation_context_id: u8,
    /// Whether this data set carries a DIMSE command (as opposed to a payload).
    pub is_command: bool,
    /// The concatenated bytes of the data set.
    pub data: Vec<u8>,
}

/// Accumulates PDV fragments in arrival order and reassembles them into
/// complete data sets as `is_last` markers are observed.
///
/// A single instance is meant to track fragments for one direction of one
/// association; command and payload fragments are tracked independently
/// since §3 of the invariants forbids them from ever interleaving within
/// the same queue slot.
#[derive(Debug, Default)]
pub struct PdvReassembler {
    pending: Vec<PDataValue>,
    last_count: usize,
}

impl PdvReassembler {
    /// Create an empty reassembler.
    pub fn new() -> Self {
        PdvReassembler {
            pending: Vec::new(),
            last_count: 0,
        }
    }

    /// Append the PDVs of a single P-DATA-TF PDU to the pending list,
    /// in arrival order, counting how many fragments were marked as last.
    pub fn push_pdata(&mut self, data: impl IntoIterator<Item = PDataValue>) {
        for pdv in data {
            if pdv.is_last {
                self.last_count += 1;
            }
            self.pending.push(pdv);
        }
    }

    /// Whether at least one complete data set is available to reassemble.
    pub fn has_complete(&self) -> bool {
        self.last_count > 0
    }

    /// Reassemble the next complete data set from the pending fragments.
    ///
    /// Walks fragments in arrival order until the first `is_last` marker,
    /// checking that all fragments merged this way share the same
    /// presentation context ID and value type (command vs. data set).
    /// The merged fragments are removed from the pending queue.
    pub fn reassemble_next(&mut self) -> Result<ReassembledDataSet> {
        ensure!(self.last_count > 0, EmptySnafu);

        let last_index = self
            .pending
            .iter()
            .position(|pdv| pdv.is_last)
            .expect("last_count > 0 implies a marked fragment exists");

        let fragments: Vec<PDataValue> = self.pending.drain(..=last_index).collect();
        self.last_count -= 1;

        let presentation_context_id = fragments[0].presentation_context_id;
        let is_command = fragments[0].value_type == PDataValueType::Command;

        let mut dataset_size = 0usize;
        for pdv in &fragments {
            ensure!(
                pdv.presentation_context_id == presentation_context_id,
                MixedPresentationContextSnafu {
                    first: presentation_context_id,
                    other: pdv.presentation_context_id,
                }
            );
            dataset_size += pdv.data.len();
        }

        let mut data = Vec::with_capacity(dataset_size);
        for pdv in fragments {
            data.extend_from_slice(&pdv.data);
        }

        Ok(ReassembledDataSet {
            presentation_context_id,
            is_command,
            data,
        })
    }

    /// Drain and reassemble every complete data set currently pending.
    pub fn reassemble_all(&mut self) -> Result<Vec<ReassembledDataSet>> {
        let mut out = Vec::with_capacity(self.last_count);
        while self.has_complete() {
            out.push(self.reassemble_next()?);
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pdv(pcid: u8, value_type: PDataValueType, is_last: bool, data: &[u8]) -> PDataValue {
        PDataValue {
            presentation_context_id: pcid,
            value_type,
            is_last,
            data: data.to_vec(),
        }
    }

    #[test]
    fn reassembles_single_fragment_message() {
        let mut reassembler = PdvReassembler::new();
        reassembler.push_pdata(vec![pdv(1, PDataValueType::Command, true, &[1, 2, 3, 4])]);

        assert!(reassembler.has_complete());
        let ds = reassembler.reassemble_next().unwrap();
        assert_eq!(ds.presentation_context_id, 1);
        assert!(ds.is_command);
        assert_eq!(ds.data, vec![1, 2, 3, 4]);
        assert!(!reassembler.has_complete());
    }

    #[test]
    fn reassembles_multi_fragment_message_in_arrival_order() {
        let mut reassembler = PdvReassembler::new();
        reassembler.push_pdata(vec![
            pdv(3, PDataValueType::Data, false, &[1, 2]),
            pdv(3, PDataValueType::Data, false, &[3, 4]),
            pdv(3, PDataValueType::Data, true, &[5, 6]),
        ]);

        let ds = reassembler.reassemble_next().unwrap();
        assert_eq!(ds.data, vec![1, 2, 3, 4, 5, 6]);
        assert!(!ds.is_command);
    }

    #[test]
    fn rejects_mixed_presentation_contexts() {
        let mut reassembler = PdvReassembler::new();
        reassembler.push_pdata(vec![
            pdv(1, PDataValueType::Data, false, &[1]),
            pdv(3, PDataValueType::Data, true, &[2]),
        ]);

        let err = reassembler.reassemble_next().unwrap_err();
        assert!(matches!(err, Error::MixedPresentationContext { .. }));
    }

    #[test]
    fn handles_two_messages_arriving_back_to_back() {
        let mut reassembler = PdvReassembler::new();
        reassembler.push_pdata(vec![
            pdv(1, PDataValueType::Command, true, &[9]),
            pdv(1, PDataValueType::Data, true, &[10, 11]),
        ]);

        let all = reassembler.reassemble_all().unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].data, vec![9]);
        assert_eq!(all[1].data, vec![10, 11]);
    }
}
