//! PDU (Protocol Data Unit) module
//!
//! This module comprises the data structures representing
//! the seven PDU types of the DICOM upper layer protocol,
//! as well as the sub-items they are built from.
//! Reading and writing of these types from and to a byte stream
//! is provided by the [`reader`] and [`writer`] submodules.

use snafu::{Backtrace, Snafu};

pub mod commands;
pub mod generated;
pub mod reader;
pub mod writer;

#[cfg(feature = "async")]
pub mod writer_nonblocking;

#[cfg(test)]
mod test;

pub use commands::{Command, DatasetConditionalCommand, DatasetForbiddenCommand, DatasetRequiredCommand};
pub use reader::read_pdu;
pub use writer::write_pdu;

/// The default maximum PDU length proposed or accepted by this implementation,
/// used whenever a peer does not state a preference (or states `0`,
/// which by convention means "no limit").
pub const DEFAULT_MAX_PDU: u32 = 16_384;

/// The smallest maximum PDU length that a conformant association
/// requestor or acceptor may declare.
pub const MINIMUM_PDU_SIZE: u32 = 4_096;

/// The largest maximum PDU length that a conformant association
/// requestor or acceptor may declare.
pub const MAXIMUM_PDU_SIZE: u32 = 131_072;

/// The size in bytes of a PDU header (PDU-type + reserved + PDU-length).
pub const PDU_HEADER_SIZE: u32 = 6;

/// An upper bound used to size read buffers regardless of a negotiated
/// maximum PDU length, so that a misbehaving peer cannot force an
/// unbounded allocation.
pub const LARGE_PDU_SIZE: u32 = 1 << 20;

/// The result of encoding (writing) a PDU or one of its sub-items.
pub type WriteResult<T> = std::result::Result<T, WriteError>;

/// The error type for encoding (writing) PDUs and their sub-items.
#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum WriteError {
    #[snafu(display("Could not write field `{}`", field))]
    WriteField {
        field: &'static str,
        source: std::io::Error,
        backtrace: Backtrace,
    },
    #[snafu(display("Could not write {} reserved bytes", bytes))]
    WriteReserved {
        bytes: u32,
        source: std::io::Error,
        backtrace: Backtrace,
    },
    #[snafu(display("Could not encode field `{}`", field))]
    EncodeField {
        field: &'static str,
        #[snafu(backtrace)]
        source: dicom_encoding::text::EncodeTextError,
    },
    #[snafu(display("Could not write chunk `{}`", name))]
    WriteChunk {
        name: &'static str,
        #[snafu(backtrace)]
        source: writer::WriteChunkError,
    },
}

/// A protocol data unit, as defined by the DICOM standard, part 8.
///
/// This enum describes the seven kinds of PDU exchanged over an
/// association, plus a catch-all variant for PDU types this
/// implementation does not recognize.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum Pdu {
    /// An A-ASSOCIATE-RQ PDU.
    AssociationRQ(AssociationRQ),
    /// An A-ASSOCIATE-AC PDU.
    AssociationAC(AssociationAC),
    /// An A-ASSOCIATE-RJ PDU.
    AssociationRJ(AssociationRJ),
    /// A P-DATA-TF PDU.
    PData { data: Vec<PDataValue> },
    /// An A-RELEASE-RQ PDU.
    ReleaseRQ,
    /// An A-RELEASE-RP PDU.
    ReleaseRP,
    /// An A-ABORT PDU.
    AbortRQ { source: AbortRQSource },
    /// A PDU type not recognized by this implementation.
    Unknown { pdu_type: u8, data: Vec<u8> },
}

/// The payload of an A-ASSOCIATE-RQ PDU.
#[derive(Debug, Clone, PartialEq)]
pub struct AssociationRQ {
    pub protocol_version: u16,
    pub calling_ae_title: String,
    pub called_ae_title: String,
    pub application_context_name: String,
    pub presentation_contexts: Vec<PresentationContextProposed>,
    pub user_variables: Vec<UserVariableItem>,
}

/// The payload of an A-ASSOCIATE-AC PDU.
#[derive(Debug, Clone, PartialEq)]
pub struct AssociationAC {
    pub protocol_version: u16,
    pub application_context_name: String,
    pub called_ae_title: String,
    pub calling_ae_title: String,
    pub presentation_contexts: Vec<PresentationContextResult>,
    pub user_variables: Vec<UserVariableItem>,
}

/// The payload of an A-ASSOCIATE-RJ PDU.
#[derive(Debug, Clone, PartialEq)]
pub struct AssociationRJ {
    pub result: AssociationRJResult,
    pub source: AssociationRJSource,
}

/// A presentation context, as proposed by an association requestor.
#[derive(Debug, Clone, PartialEq)]
pub struct PresentationContextProposed {
    /// The presentation context ID, an odd integer between 1 and 255.
    pub id: u8,
    pub abstract_syntax: String,
    pub transfer_syntaxes: Vec<String>,
    /// Whether the requestor proposes to act as SCU for this abstract syntax.
    ///
    /// Populated from an accompanying [`UserVariableItem::RoleSelection`]
    /// sub-item, if present; `true` by default, since a requestor that does
    /// not negotiate roles explicitly is assumed to act as SCU only.
    pub requestor_is_scu: bool,
    /// Whether the requestor proposes to act as SCP for this abstract syntax.
    pub requestor_is_scp: bool,
}

impl PresentationContextProposed {
    /// Build a proposed presentation context with the default role
    /// assignment (requestor acts as SCU only).
    pub fn new(id: u8, abstract_syntax: String, transfer_syntaxes: Vec<String>) -> Self {
        PresentationContextProposed {
            id,
            abstract_syntax,
            transfer_syntaxes,
            requestor_is_scu: true,
            requestor_is_scp: false,
        }
    }
}

/// A presentation context, as accorded by an association acceptor.
#[derive(Debug, Clone, PartialEq)]
pub struct PresentationContextResult {
    pub id: u8,
    pub reason: PresentationContextResultReason,
    /// The accorded transfer syntax.
    ///
    /// Only meaningful when `reason` is
    /// [`Acceptance`](PresentationContextResultReason::Acceptance);
    /// otherwise this field is not significant and its value should not be
    /// relied upon.
    pub transfer_syntax: String,
}

/// A negotiated presentation context, computed while an acceptor processes
/// an incoming A-ASSOCIATE-RQ.
///
/// This is an internal bookkeeping type: it records the abstract syntax and
/// the accorded roles alongside the outcome, so that the association engine
/// can still look these up after the wire-level
/// [`PresentationContextResult`] (which omits them) has been sent back.
#[derive(Debug, Clone, PartialEq)]
pub struct PresentationContextNegotiated {
    pub id: u8,
    pub reason: PresentationContextResultReason,
    pub transfer_syntax: String,
    pub abstract_syntax: String,
    /// Whether this application entity accepted to act as SCU for this context.
    pub acceptor_is_scu: bool,
    /// Whether this application entity accepted to act as SCP for this context.
    pub acceptor_is_scp: bool,
}

/// The reason/result of a presentation context negotiation.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PresentationContextResultReason {
    Acceptance,
    UserRejection,
    NoReason,
    AbstractSyntaxNotSupported,
    TransferSyntaxesNotSupported,
}

impl PresentationContextResultReason {
    pub fn from(value: u8) -> Option<Self> {
        match value {
            0 => Some(PresentationContextResultReason::Acceptance),
            1 => Some(PresentationContextResultReason::UserRejection),
            2 => Some(PresentationContextResultReason::NoReason),
            3 => Some(PresentationContextResultReason::AbstractSyntaxNotSupported),
            4 => Some(PresentationContextResultReason::TransferSyntaxesNotSupported),
            _ => None,
        }
    }
}

/// The result field of an A-ASSOCIATE-RJ PDU.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum AssociationRJResult {
    Permanent,
    Transient,
}

impl AssociationRJResult {
    pub fn from(value: u8) -> Option<Self> {
        match value {
            1 => Some(AssociationRJResult::Permanent),
            2 => Some(AssociationRJResult::Transient),
            _ => None,
        }
    }
}

/// The source/reason field of an A-ASSOCIATE-RJ PDU.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssociationRJSource {
    ServiceUser(AssociationRJServiceUserReason),
    ServiceProviderASCE(AssociationRJServiceProviderASCEReason),
    ServiceProviderPresentation(AssociationRJServiceProviderPresentationReason),
}

impl AssociationRJSource {
    pub fn from(source: u8, reason: u8) -> Option<Self> {
        match source {
            0x01 => Some(AssociationRJSource::ServiceUser(
                AssociationRJServiceUserReason::from(reason),
            )),
            0x02 => Some(AssociationRJSource::ServiceProviderASCE(
                AssociationRJServiceProviderASCEReason::from(reason),
            )),
            0x03 => Some(AssociationRJSource::ServiceProviderPresentation(
                AssociationRJServiceProviderPresentationReason::from(reason),
            )),
            _ => None,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum AssociationRJServiceUserReason {
    NoReasonGiven,
    ApplicationContextNameNotSupported,
    CallingAETitleNotRecognized,
    CalledAETitleNotRecognized,
    Reserved(u8),
}

impl AssociationRJServiceUserReason {
    pub fn from(value: u8) -> Self {
        match value {
            1 => AssociationRJServiceUserReason::NoReasonGiven,
            2 => AssociationRJServiceUserReason::ApplicationContextNameNotSupported,
            3 => AssociationRJServiceUserReason::CallingAETitleNotRecognized,
            7 => AssociationRJServiceUserReason::CalledAETitleNotRecognized,
            other => AssociationRJServiceUserReason::Reserved(other),
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum AssociationRJServiceProviderASCEReason {
    NoReasonGiven,
    ProtocolVersionNotSupported,
}

impl AssociationRJServiceProviderASCEReason {
    pub fn from(value: u8) -> Self {
        match value {
            2 => AssociationRJServiceProviderASCEReason::ProtocolVersionNotSupported,
            _ => AssociationRJServiceProviderASCEReason::NoReasonGiven,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum AssociationRJServiceProviderPresentationReason {
    TemporaryCongestion,
    LocalLimitExceeded,
    Reserved(u8),
}

impl AssociationRJServiceProviderPresentationReason {
    pub fn from(value: u8) -> Self {
        match value {
            1 => AssociationRJServiceProviderPresentationReason::TemporaryCongestion,
            2 => AssociationRJServiceProviderPresentationReason::LocalLimitExceeded,
            other => AssociationRJServiceProviderPresentationReason::Reserved(other),
        }
    }
}

/// The source/reason field of an A-ABORT PDU.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum AbortRQSource {
    ServiceUser,
    Reserved,
    ServiceProvider(AbortRQServiceProviderReason),
}

impl AbortRQSource {
    pub fn from(source: u8, reason: u8) -> Option<Self> {
        match source {
            0x00 => Some(AbortRQSource::ServiceUser),
            0x01 => Some(AbortRQSource::Reserved),
            0x02 => Some(AbortRQSource::ServiceProvider(
                AbortRQServiceProviderReason::from(reason),
            )),
            _ => None,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum AbortRQServiceProviderReason {
    ReasonNotSpecified,
    UnrecognizedPdu,
    UnexpectedPdu,
    Reserved,
    UnrecognizedPduParameter,
    UnexpectedPduParameter,
    InvalidPduParameter,
}

impl AbortRQServiceProviderReason {
    pub fn from(value: u8) -> Self {
        match value {
            1 => AbortRQServiceProviderReason::UnrecognizedPdu,
            2 => AbortRQServiceProviderReason::UnexpectedPdu,
            3 => AbortRQServiceProviderReason::Reserved,
            4 => AbortRQServiceProviderReason::UnrecognizedPduParameter,
            5 => AbortRQServiceProviderReason::UnexpectedPduParameter,
            6 => AbortRQServiceProviderReason::InvalidPduParameter,
            _ => AbortRQServiceProviderReason::ReasonNotSpecified,
        }
    }
}

/// A single presentation data value, carried by a P-DATA-TF PDU.
#[derive(Debug, Clone, PartialEq)]
pub struct PDataValue {
    pub presentation_context_id: u8,
    pub value_type: PDataValueType,
    pub is_last: bool,
    pub data: Vec<u8>,
}

/// Whether a presentation data value fragment carries a DIMSE command
/// or a data set.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PDataValueType {
    Command,
    Data,
}

/// A variable item found at the top level of an A-ASSOCIATE-RQ/AC PDU.
#[derive(Debug, Clone, PartialEq)]
pub enum PduVariableItem {
    Unknown(u8),
    ApplicationContext(String),
    PresentationContextProposed(PresentationContextProposed),
    PresentationContextResult(PresentationContextResult),
    UserVariables(Vec<UserVariableItem>),
}

/// A user information sub-item, found within a User Information item (0x50).
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum UserVariableItem {
    MaxLength(u32),
    ImplementationClassUID(String),
    ImplementationVersionName(String),
    SopClassExtendedNegotiationSubItem(String, Vec<u8>),
    UserIdentityItem(UserIdentity),
    /// Asynchronous operations window negotiation (item type 0x53).
    AsynchronousOperationsWindow {
        max_ops_invoked: u16,
        max_ops_performed: u16,
    },
    /// SCP/SCU role selection negotiation (item type 0x54).
    RoleSelection {
        sop_class_uid: String,
        scu_role: bool,
        scp_role: bool,
    },
    Unknown(u8, Vec<u8>),
}

/// The identity of a requestor, as conveyed by a User Identity item (0x58).
#[derive(Debug, Clone, PartialEq)]
pub struct UserIdentity {
    identity_type: UserIdentityType,
    positive_response_requested: bool,
    primary_field: Vec<u8>,
    secondary_field: Vec<u8>,
}

impl UserIdentity {
    pub fn new(
        positive_response_requested: bool,
        identity_type: UserIdentityType,
        primary_field: Vec<u8>,
        secondary_field: Vec<u8>,
    ) -> Self {
        UserIdentity {
            identity_type,
            positive_response_requested,
            primary_field,
            secondary_field,
        }
    }

    pub fn identity_type(&self) -> UserIdentityType {
        self.identity_type
    }

    pub fn positive_response_requested(&self) -> bool {
        self.positive_response_requested
    }

    pub fn primary_field(&self) -> &Vec<u8> {
        &self.primary_field
    }

    pub fn secondary_field(&self) -> &Vec<u8> {
        &self.secondary_field
    }
}

/// The kind of user identity presented in a User Identity item.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UserIdentityType {
    Username,
    UsernamePasscode,
    Kerberos,
    Saml,
    Jwt,
}

impl UserIdentityType {
    pub fn from(value: u8) -> Option<Self> {
        match value {
            1 => Some(UserIdentityType::Username),
            2 => Some(UserIdentityType::UsernamePasscode),
            3 => Some(UserIdentityType::Kerberos),
            4 => Some(UserIdentityType::Saml),
            5 => Some(UserIdentityType::Jwt),
            _ => None,
        }
    }

    pub fn to_u8(self) -> u8 {
        match self {
            UserIdentityType::Username => 1,
            UserIdentityType::UsernamePasscode => 2,
            UserIdentityType::Kerberos => 3,
            UserIdentityType::Saml => 4,
            UserIdentityType::Jwt => 5,
        }
    }
}
