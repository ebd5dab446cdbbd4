//! DIMSE (DICOM Message Service Element) layer.
//!
//! A thin typed wrapper around the association engine: it turns reassembled
//! command data sets ([`crate::pdv::ReassembledDataSet`]) into the twelve
//! DIMSE command/response kinds (C-STORE/GET/FIND/MOVE/ECHO/CANCEL,
//! N-EVENT-REPORT/GET/SET/ACTION/CREATE/DELETE), correlates responses to the
//! requests that triggered them, and classifies status codes into the five
//! DICOM status groups.

use std::sync::atomic::{AtomicU16, Ordering};

use dicom_core::Tag;
use dicom_dictionary_std::tags;
use dicom_encoding::TransferSyntax;
use dicom_object::{AccessError, InMemDicomObject, ReadError, WriteError};
use snafu::{OptionExt, ResultExt, Snafu};

/// Command Field values, mirroring [`crate::pdu::commands::CommandField`]
/// but used here to dispatch a decoded command dataset to its typed kind.
#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum CommandKind {
    CStoreRq,
    CStoreRsp,
    CGetRq,
    CGetRsp,
    CFindRq,
    CFindRsp,
    CMoveRq,
    CMoveRsp,
    CEchoRq,
    CEchoRsp,
    NEventReportRq,
    NEventReportRsp,
    NGetRq,
    NGetRsp,
    NSetRq,
    NSetRsp,
    NActionRq,
    NActionRsp,
    NCreateRq,
    NCreateRsp,
    NDeleteRq,
    NDeleteRsp,
    CCancelRq,
}

impl CommandKind {
    /// Dispatch on the raw Command Field (0000,0100) value.
    pub fn from_command_field(command_field: u16) -> Option<Self> {
        use CommandKind::*;
        Some(match command_field {
            0x0001 => CStoreRq,
            0x8001 => CStoreRsp,
            0x0010 => CGetRq,
            0x8010 => CGetRsp,
            0x0020 => CFindRq,
            0x8020 => CFindRsp,
            0x0021 => CMoveRq,
            0x8021 => CMoveRsp,
            0x0030 => CEchoRq,
            0x8030 => CEchoRsp,
            0x0100 => NEventReportRq,
            0x8100 => NEventReportRsp,
            0x0110 => NGetRq,
            0x8110 => NGetRsp,
            0x0120 => NSetRq,
            0x8120 => NSetRsp,
            0x0130 => NActionRq,
            0x8130 => NActionRsp,
            0x0140 => NCreateRq,
            0x8140 => NCreateRsp,
            0x0150 => NDeleteRq,
            0x8150 => NDeleteRsp,
            0x0FFF => CCancelRq,
            _ => return None,
        })
    }

    /// Whether this kind denotes a response (Command Field high bit set),
    /// as opposed to a request.
    pub fn is_response(self) -> bool {
        use CommandKind::*;
        matches!(
            self,
            CStoreRsp
                | CGetRsp
                | CFindRsp
                | CMoveRsp
                | CEchoRsp
                | NEventReportRsp
                | NGetRsp
                | NSetRsp
                | NActionRsp
                | NCreateRsp
                | NDeleteRsp
        )
    }
}

/// A DIMSE status code, classified into one of the five groups defined by
/// the DICOM standard's status encoding (PS3.7 Annex C).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusType {
    Success,
    Pending,
    Warning,
    Cancel,
    Failure,
}

/// Classify a raw DIMSE status code (0000,0900) into its status group.
///
/// Grounded on the status ranges used for C-STORE/C-FIND/C-GET/C-MOVE
/// responses: `0x0000` is always success, `0xFF00`/`0xFF01` are pending,
/// `0xFE00` is cancel, the `0xB000..=0xBFFF` range and a handful of
/// specific codes (`0x0107`, `0x0116`) are warnings, and everything else
/// is a failure.
pub fn classify_status(status: u16) -> StatusType {
    match status {
        0x0000 => StatusType::Success,
        0xFF00 | 0xFF01 => StatusType::Pending,
        0xFE00 => StatusType::Cancel,
        0x0107 | 0x0116 => StatusType::Warning,
        0xB000..=0xBFFF => StatusType::Warning,
        _ => StatusType::Failure,
    }
}

/// Whether a status belongs to the "pending" group and should therefore
/// keep its request's Message ID registered as outstanding
/// (§4.4.3 step 3 of the response bookkeeping rules).
pub fn is_pending(status: u16) -> bool {
    matches!(status, 0xFF00..=0xFF0F)
}

#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum Error {
    #[snafu(display("command data set is missing required element {tag}"))]
    MissingElement { tag: Tag, source: AccessError },

    #[snafu(display("could not read value of element {tag}"))]
    ReadValue {
        tag: Tag,
        source: dicom_core::value::ConvertValueError,
    },

    #[snafu(display("command field {command_field:#06X} does not map to a known DIMSE command kind"))]
    UnknownCommandField { command_field: u16 },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

fn get_u16(obj: &InMemDicomObject, tag: Tag) -> Result<u16> {
    obj.element(tag)
        .context(MissingElementSnafu { tag })?
        .value()
        .to_int()
        .context(ReadValueSnafu { tag })
}

fn get_u16_opt(obj: &InMemDicomObject, tag: Tag) -> Result<Option<u16>> {
    match obj.element_opt(tag) {
        Ok(Some(elem)) => Ok(Some(
            elem.value().to_int().context(ReadValueSnafu { tag })?,
        )),
        Ok(None) => Ok(None),
        Err(source) => Err(Error::MissingElement { tag, source }),
    }
}

/// A decoded DIMSE command or response header, common to every command kind.
///
/// Carries just the fields needed to dispatch and correlate a message; the
/// full, kind-specific field set is read from the same underlying data set
/// by the caller once the [`CommandKind`] is known.
#[derive(Debug, Clone)]
pub struct CommandHeader {
    pub kind: CommandKind,
    pub command_field: u16,
    pub message_id: Option<u16>,
    pub message_id_being_responded_to: Option<u16>,
    pub status: Option<u16>,
    pub has_dataset: bool,
}

impl CommandHeader {
    /// Parse the common command header fields out of a reassembled command
    /// data set (§4.6, §6 "DIMSE command-set tags consumed").
    pub fn from_command_dataset(obj: &InMemDicomObject) -> Result<Self> {
        let command_field = get_u16(obj, tags::COMMAND_FIELD)?;
        let kind = CommandKind::from_command_field(command_field)
            .context(UnknownCommandFieldSnafu { command_field })?;
        let message_id = get_u16_opt(obj, tags::MESSAGE_ID)?;
        let message_id_being_responded_to =
            get_u16_opt(obj, tags::MESSAGE_ID_BEING_RESPONDED_TO)?;
        let status = get_u16_opt(obj, tags::STATUS)?;
        let data_set_type = get_u16_opt(obj, tags::COMMAND_DATA_SET_TYPE)?;
        let has_dataset = data_set_type.map(|v| v != 0x0101).unwrap_or(false);

        Ok(CommandHeader {
            kind,
            command_field,
            message_id,
            message_id_being_responded_to,
            status,
            has_dataset,
        })
    }

    /// The status classification of this message, if it carries a status
    /// (requests generally do not).
    pub fn status_type(&self) -> Option<StatusType> {
        self.status.map(classify_status)
    }
}

/// Pending/partial sub-operation counters carried by C-GET/C-MOVE responses
/// (§4.6, "Pending/partial responses carry counters").
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SubOperationCounters {
    pub remaining: Option<u16>,
    pub completed: Option<u16>,
    pub failed: Option<u16>,
    pub warning: Option<u16>,
}

impl SubOperationCounters {
    /// Read the four sub-operation counters from a C-GET/C-MOVE response
    /// command data set; absent tags are reported as `None`.
    pub fn from_command_dataset(obj: &InMemDicomObject) -> Result<Self> {
        Ok(SubOperationCounters {
            remaining: get_u16_opt(obj, tags::NUMBER_OF_REMAINING_SUBOPERATIONS)?,
            completed: get_u16_opt(obj, tags::NUMBER_OF_COMPLETED_SUBOPERATIONS)?,
            failed: get_u16_opt(obj, tags::NUMBER_OF_FAILED_SUBOPERATIONS)?,
            warning: get_u16_opt(obj, tags::NUMBER_OF_WARNING_SUBOPERATIONS)?,
        })
    }
}

/// Generates Message IDs for outgoing DIMSE requests.
///
/// A thin atomic counter, favoring lock-free bookkeeping where a
/// single integer suffices; wraps on overflow since Message ID is a
/// 16-bit field reused across the lifetime of an association.
#[derive(Debug, Default)]
pub struct MessageIdGenerator(AtomicU16);

impl MessageIdGenerator {
    pub fn new() -> Self {
        // Message ID 0 is technically valid but easy to confuse with
        // "unset"; start the sequence at 1.
        MessageIdGenerator(AtomicU16::new(1))
    }

    /// Obtain the next Message ID, wrapping past `u16::MAX` back to 1.
    pub fn next(&self) -> u16 {
        let id = self.0.fetch_add(1, Ordering::Relaxed);
        if id == 0 {
            self.0.store(1, Ordering::Relaxed);
            1
        } else {
            id
        }
    }
}

/// Abstracts the dataset encode/decode boundary used when turning DIMSE
/// command and payload data sets to and from bytes on the wire, so that the
/// association engine does not need to commit to a single concrete
/// in-memory representation.
pub trait DatasetCodec {
    /// The in-memory dataset representation produced/consumed by this codec.
    type Dataset;
    type EncodeError: std::error::Error + 'static;
    type DecodeError: std::error::Error + 'static;

    /// Serialize a dataset using the given transfer syntax, appending the
    /// encoded bytes to `out`.
    fn encode_dataset(
        dataset: &Self::Dataset,
        ts: &TransferSyntax,
        out: &mut Vec<u8>,
    ) -> Result<(), Self::EncodeError>;

    /// Parse a dataset from its encoded bytes, using the given transfer
    /// syntax.
    fn decode_dataset(bytes: &[u8], ts: &TransferSyntax) -> Result<Self::Dataset, Self::DecodeError>;
}

/// The default [`DatasetCodec`], backed by [`InMemDicomObject`] and the
/// same `read_dataset_with_ts`/`write_dataset_with_ts` pair already used by
/// [`crate::pdu::commands::Command::encode`].
#[derive(Debug, Clone, Copy, Default)]
pub struct InMemDatasetCodec;

impl DatasetCodec for InMemDatasetCodec {
    type Dataset = InMemDicomObject;
    type EncodeError = WriteError;
    type DecodeError = ReadError;

    fn encode_dataset(
        dataset: &InMemDicomObject,
        ts: &TransferSyntax,
        out: &mut Vec<u8>,
    ) -> Result<(), WriteError> {
        dataset.write_dataset_with_ts(out, ts)
    }

    fn decode_dataset(bytes: &[u8], ts: &TransferSyntax) -> Result<InMemDicomObject, ReadError> {
        InMemDicomObject::read_dataset_with_ts(bytes, ts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dicom_core::{dicom_value, DataElement, VR};

    #[test]
    fn classifies_known_status_groups() {
        assert_eq!(classify_status(0x0000), StatusType::Success);
        assert_eq!(classify_status(0xFF00), StatusType::Pending);
        assert_eq!(classify_status(0xFF01), StatusType::Pending);
        assert_eq!(classify_status(0xFE00), StatusType::Cancel);
        assert_eq!(classify_status(0xB006), StatusType::Warning);
        assert_eq!(classify_status(0x0107), StatusType::Warning);
        assert_eq!(classify_status(0xA700), StatusType::Failure);
    }

    #[test]
    fn pending_status_keeps_message_id_outstanding() {
        assert!(is_pending(0xFF00));
        assert!(is_pending(0xFF01));
        assert!(!is_pending(0x0000));
    }

    #[test]
    fn dispatches_command_field_to_kind() {
        assert_eq!(
            CommandKind::from_command_field(0x0030),
            Some(CommandKind::CEchoRq)
        );
        assert_eq!(
            CommandKind::from_command_field(0x8030),
            Some(CommandKind::CEchoRsp)
        );
        assert!(CommandKind::from_command_field(0x8030).unwrap().is_response());
        assert!(!CommandKind::from_command_field(0x0030).unwrap().is_response());
        assert_eq!(CommandKind::from_command_field(0x1234), None);
    }

    #[test]
    fn parses_command_header_from_dataset() {
        let obj = InMemDicomObject::command_from_element_iter(vec![
            DataElement::new(tags::COMMAND_FIELD, VR::US, dicom_value!(0x0030_u16)),
            DataElement::new(tags::MESSAGE_ID, VR::US, dicom_value!(7_u16)),
            DataElement::new(
                tags::COMMAND_DATA_SET_TYPE,
                VR::US,
                dicom_value!(0x0101_u16),
            ),
        ]);

        let header = CommandHeader::from_command_dataset(&obj).unwrap();
        assert_eq!(header.kind, CommandKind::CEchoRq);
        assert_eq!(header.message_id, Some(7));
        assert!(!header.has_dataset);
    }

    #[test]
    fn message_id_generator_wraps_past_max() {
        let gen = MessageIdGenerator(AtomicU16::new(u16::MAX));
        assert_eq!(gen.next(), u16::MAX);
        assert_eq!(gen.next(), 1);
    }

    #[test]
    fn in_mem_dataset_codec_round_trips_through_negotiated_ts() {
        use dicom_dictionary_std::uids::VERIFICATION;
        use dicom_transfer_syntax_registry::entries::EXPLICIT_VR_LITTLE_ENDIAN;

        let obj = InMemDicomObject::command_from_element_iter(vec![DataElement::new(
            tags::AFFECTED_SOP_CLASS_UID,
            VR::UI,
            dicom_value!(VERIFICATION),
        )]);

        let ts = EXPLICIT_VR_LITTLE_ENDIAN.erased();
        let mut bytes = Vec::new();
        InMemDatasetCodec::encode_dataset(&obj, &ts, &mut bytes).unwrap();

        let decoded = InMemDatasetCodec::decode_dataset(&bytes, &ts).unwrap();
        assert_eq!(
            decoded
                .element(tags::AFFECTED_SOP_CLASS_UID)
                .unwrap()
                .to_str()
                .unwrap(),
            VERIFICATION
        );
    }
}
