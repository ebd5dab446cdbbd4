//! Message-level association engine.
//!
//! [`client::ClientAssociation`](super::client::ClientAssociation) and
//! [`server::ServerAssociation`](super::server::ServerAssociation) only take
//! an association as far as negotiation: once established, they hand back a
//! thin PDU-in/PDU-out channel and leave DIMSE message exchange, PDV
//! reassembly and operation bookkeeping to the caller. [`AssociationEngine`]
//! sits on top of one of those negotiated associations and does that work:
//! a background thread continuously reads PDUs off the wire, reassembles
//! P-DATA-TF fragments into whole command/payload data sets
//! ([`crate::pdv::PdvReassembler`]), and places them on a ready queue: the
//! foreground thread sends requests/responses and pulls finished messages
//! off that queue, correlating them by Message ID.

use std::collections::{HashSet, VecDeque};
use std::io::{Read, Write};
use std::net::TcpStream;
use std::sync::{Arc, Condvar, Mutex};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use dicom_encoding::TransferSyntax;
use dicom_object::InMemDicomObject;
use dicom_transfer_syntax_registry::entries::IMPLICIT_VR_LITTLE_ENDIAN;
use dicom_transfer_syntax_registry::{TransferSyntaxIndex, TransferSyntaxRegistry};
use snafu::{ensure, OptionExt, ResultExt, Snafu};

use crate::association::client::{AcceptedPresentationContext, ClientAssociation};
use crate::association::pdata::PDataWriter;
use crate::association::server::ServerAssociation;
use crate::association::CloseSocket;
use crate::dimse::{CommandHeader, DatasetCodec, InMemDatasetCodec, MessageIdGenerator};
use crate::pdu::{self, AbortRQServiceProviderReason, AbortRQSource, Pdu};
use crate::pdv::PdvReassembler;

/// A byte-stream resource that can be split into an independent read half
/// and write half, so that a background thread can read PDUs while the
/// foreground thread writes them without either side blocking the other.
///
/// Implemented only for [`TcpStream`]: TLS streams are not supported by
/// this engine (see `DESIGN.md`).
pub trait Transport: Sized {
    type Reader: Read + Send + 'static;
    type Writer: Write + CloseSocket + Send + 'static;

    /// Split this transport into a reader and a writer half that refer to
    /// the same underlying connection.
    fn split(self) -> std::io::Result<(Self::Reader, Self::Writer)>;
}

impl Transport for TcpStream {
    type Reader = TcpStream;
    type Writer = TcpStream;

    fn split(self) -> std::io::Result<(TcpStream, TcpStream)> {
        let reader = self.try_clone()?;
        Ok((reader, self))
    }
}

/// A negotiated presentation context, in the shape the engine needs:
/// regardless of whether it came from the requestor's or the acceptor's
/// point of view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresentationContextInfo {
    pub id: u8,
    pub abstract_syntax: String,
    pub transfer_syntax: String,
    /// Whether this node acts as SCU for this context.
    pub scu_role: bool,
    /// Whether this node acts as SCP for this context.
    pub scp_role: bool,
}

impl From<&AcceptedPresentationContext> for PresentationContextInfo {
    fn from(pc: &AcceptedPresentationContext) -> Self {
        PresentationContextInfo {
            id: pc.id,
            abstract_syntax: pc.abstract_syntax.clone(),
            transfer_syntax: pc.transfer_syntax.clone(),
            scu_role: pc.scu_role,
            scp_role: pc.scp_role,
        }
    }
}

impl From<&crate::pdu::PresentationContextNegotiated> for PresentationContextInfo {
    fn from(pc: &crate::pdu::PresentationContextNegotiated) -> Self {
        PresentationContextInfo {
            id: pc.id,
            abstract_syntax: pc.abstract_syntax.clone(),
            transfer_syntax: pc.transfer_syntax.clone(),
            scu_role: pc.acceptor_is_scu,
            scp_role: pc.acceptor_is_scp,
        }
    }
}

/// Everything the engine needs to know about an already-negotiated
/// association, independent of which side established it.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    pub local_ae_title: String,
    pub peer_ae_title: String,
    /// This node's own declared maximum PDU length.
    pub local_max_pdu_length: u32,
    /// The maximum PDU length the peer declared it is willing to receive.
    pub peer_max_pdu_length: u32,
    pub local_max_ops_invoked: u16,
    pub local_max_ops_performed: u16,
    pub peer_max_ops_invoked: u16,
    pub peer_max_ops_performed: u16,
    pub presentation_contexts: Vec<PresentationContextInfo>,
    /// Maximum time to wait for a DIMSE response or a release acknowledgment.
    pub dimse_timeout: Option<Duration>,
}

/// A fully reassembled and decoded DIMSE message: a command together with
/// its optional payload data set, already paired up by the background
/// reader thread.
#[derive(Debug, Clone)]
pub struct AssociationMessage {
    pub presentation_context_id: u8,
    pub command: CommandHeader,
    pub command_dataset: InMemDicomObject,
    pub payload: Option<InMemDicomObject>,
}

#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum Error {
    #[snafu(display("Could not send PDU to peer"))]
    Send { source: crate::pdu::writer::Error },

    #[snafu(display("Could not decode command data set"))]
    CommandHeader { source: crate::dimse::Error },

    #[snafu(display("Could not decode data set"))]
    DecodeDataset {
        source: dicom_object::ReadError,
    },

    #[snafu(display("Could not encode data set"))]
    EncodeDataset {
        source: dicom_object::WriteError,
    },

    #[snafu(display(
        "Presentation context {} is not part of this association",
        id
    ))]
    UnknownPresentationContext { id: u8 },

    #[snafu(display(
        "This node did not negotiate the {} role for presentation context {}",
        role,
        id
    ))]
    RoleNotGranted { id: u8, role: &'static str },

    #[snafu(display(
        "A payload data set arrived with no command data set pending ahead of it"
    ))]
    UnexpectedPayload,

    #[snafu(display(
        "A new command data set arrived on presentation context {} while a prior \
         command on presentation context {} was still awaiting its payload",
        new_pc_id,
        pending_pc_id
    ))]
    UnexpectedCommand { pending_pc_id: u8, new_pc_id: u8 },

    #[snafu(display(
        "A payload data set arrived on presentation context {} but the pending \
         command was sent on presentation context {}",
        got,
        expected
    ))]
    PayloadPresentationContextMismatch { expected: u8, got: u8 },

    #[snafu(display("The maximum number of outstanding invoked operations ({}) was reached", limit))]
    TooManyOperationsInvoked { limit: u16 },

    #[snafu(display("The maximum number of outstanding performed operations ({}) was reached", limit))]
    TooManyOperationsPerformed { limit: u16 },

    #[snafu(display(
        "Received a response whose Message-ID-Being-Responded-To ({}) does not match any outstanding request",
        message_id
    ))]
    WrongResponseId { message_id: u16 },

    #[snafu(display("Received a request re-using Message ID {} still in progress", message_id))]
    WrongCommandId { message_id: u16 },

    #[snafu(display("Timed out waiting for a DIMSE response"))]
    DimseTimeout,

    #[snafu(display("The association was released"))]
    Released,

    #[snafu(display("The association was aborted by the peer: {:?}", source))]
    AbortedByPeer { source: AbortRQSource },

    #[snafu(display("The association was closed unexpectedly: {}", message))]
    Closed { message: String },

    #[snafu(display("I/O error while writing a message"))]
    Io { source: std::io::Error },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Terminal state of an association, observed by the background reader
/// thread (except [`Terminal::Aborted`], which can also be set directly by
/// [`AssociationEngine::abort`]).
#[derive(Debug, Clone)]
enum Terminal {
    Released,
    PeerReleased,
    Aborted(AbortRQSource),
    Error(String),
}

impl Terminal {
    fn into_error(self) -> Error {
        match self {
            Terminal::Released | Terminal::PeerReleased => Error::Released,
            Terminal::Aborted(source) => Error::AbortedByPeer { source },
            Terminal::Error(message) => Error::Closed { message },
        }
    }
}

#[derive(Debug, Default)]
struct Inbox {
    queue: VecDeque<AssociationMessage>,
    terminal: Option<Terminal>,
}

/// Message IDs this node is currently awaiting a response for (`waiting`,
/// invoked-side) or currently handling as an inbound request (`processing`,
/// performed-side). Shared between the foreground caller and the background
/// reader thread: the reader enforces the inbound half of §4.4.4 step 4
/// (duplicate/`max_ops_performed` checks on requests, `waiting`-membership
/// checks on responses) while the foreground enforces the outbound half in
/// [`AssociationEngine::send_request`]/[`AssociationEngine::get_response`].
#[derive(Debug, Default)]
struct Bookkeeping {
    waiting: HashSet<u16>,
    processing: HashSet<u16>,
}

/// A DICOM upper layer association with message-level send/receive support.
///
/// Built from an already-negotiated [`ClientAssociation`] (via
/// [`AssociationEngine::from_client`]) or [`ServerAssociation`] (via
/// [`AssociationEngine::from_server`]).
pub struct AssociationEngine<T: Transport> {
    config: EngineConfig,
    message_ids: MessageIdGenerator,
    writer: Arc<Mutex<T::Writer>>,
    inbox: Arc<(Mutex<Inbox>, Condvar)>,
    bookkeeping: Arc<Mutex<Bookkeeping>>,
    reader_handle: Mutex<Option<JoinHandle<()>>>,
}

impl AssociationEngine<TcpStream> {
    /// Build an engine from a negotiated [`ClientAssociation`].
    pub fn from_client(
        client: ClientAssociation,
        local_ae_title: impl Into<String>,
        peer_ae_title: impl Into<String>,
        local_max_ops_invoked: u16,
        local_max_ops_performed: u16,
        dimse_timeout: Option<Duration>,
    ) -> Result<Self> {
        let (contexts, peer_max_pdu_length, local_max_pdu_length, peer_max_ops, socket) = client
            .into_parts()
            .map_err(|source| Error::Closed {
                message: source.to_string(),
            })?;

        let config = EngineConfig {
            local_ae_title: local_ae_title.into(),
            peer_ae_title: peer_ae_title.into(),
            local_max_pdu_length,
            peer_max_pdu_length,
            local_max_ops_invoked,
            local_max_ops_performed,
            peer_max_ops_invoked: peer_max_ops.0,
            peer_max_ops_performed: peer_max_ops.1,
            presentation_contexts: contexts.iter().map(PresentationContextInfo::from).collect(),
            dimse_timeout,
        };

        Self::new(socket, config)
    }
}

impl<T> AssociationEngine<T>
where
    T: Transport,
{
    /// Build an engine from a negotiated [`ServerAssociation`].
    pub fn from_server(
        server: ServerAssociation<T>,
        local_ae_title: impl Into<String>,
        local_max_ops_invoked: u16,
        local_max_ops_performed: u16,
        dimse_timeout: Option<Duration>,
    ) -> Result<Self>
    where
        T: Read + Write + CloseSocket,
    {
        let (contexts, requestor_max_pdu_length, acceptor_max_pdu_length, peer_ae_title, peer_max_ops, socket) =
            server.into_parts();

        let config = EngineConfig {
            local_ae_title: local_ae_title.into(),
            peer_ae_title,
            local_max_pdu_length: acceptor_max_pdu_length,
            peer_max_pdu_length: requestor_max_pdu_length,
            local_max_ops_invoked,
            local_max_ops_performed,
            peer_max_ops_invoked: peer_max_ops.0,
            peer_max_ops_performed: peer_max_ops.1,
            presentation_contexts: contexts.iter().map(PresentationContextInfo::from).collect(),
            dimse_timeout,
        };

        Self::new(socket, config)
    }

    /// Take ownership of an already-split transport and spawn the
    /// background reader thread over it.
    fn new(transport: T, config: EngineConfig) -> Result<Self> {
        let (reader, writer) = transport.split().map_err(|source| Error::Closed {
            message: source.to_string(),
        })?;

        let writer = Arc::new(Mutex::new(writer));
        let inbox = Arc::new((Mutex::new(Inbox::default()), Condvar::new()));
        let bookkeeping = Arc::new(Mutex::new(Bookkeeping::default()));

        let reader_handle = {
            let writer = Arc::clone(&writer);
            let inbox = Arc::clone(&inbox);
            let bookkeeping = Arc::clone(&bookkeeping);
            let max_pdu_length = config.local_max_pdu_length;
            let max_ops_performed = config.local_max_ops_performed;
            let contexts = config.presentation_contexts.clone();
            thread::spawn(move || {
                run_reader(
                    reader,
                    max_pdu_length,
                    max_ops_performed,
                    contexts,
                    inbox,
                    bookkeeping,
                    writer,
                )
            })
        };

        Ok(AssociationEngine {
            config,
            message_ids: MessageIdGenerator::new(),
            writer,
            inbox,
            bookkeeping,
            reader_handle: Mutex::new(Some(reader_handle)),
        })
    }

    /// The negotiated presentation contexts.
    pub fn presentation_contexts(&self) -> &[PresentationContextInfo] {
        &self.config.presentation_contexts
    }

    /// Obtain the next Message ID to use for an outgoing request.
    pub fn next_message_id(&self) -> u16 {
        self.message_ids.next()
    }

    fn context(&self, id: u8) -> Result<&PresentationContextInfo> {
        self.config
            .presentation_contexts
            .iter()
            .find(|pc| pc.id == id)
            .context(UnknownPresentationContextSnafu { id })
    }

    fn negotiated_ts(&self, id: u8) -> Result<TransferSyntax> {
        let pc = self.context(id)?;
        Ok(TransferSyntaxRegistry
            .get(&pc.transfer_syntax)
            .cloned()
            .unwrap_or_else(|| IMPLICIT_VR_LITTLE_ENDIAN.erased()))
    }

    /// Send a DIMSE request over the given presentation context.
    ///
    /// `command` must already carry a Message ID (see
    /// [`next_message_id`](Self::next_message_id)) and the appropriate
    /// Command Data Set Type. Fails if this node did not negotiate the SCU
    /// role for the context, or if the asynchronous operations window is
    /// already full.
    pub fn send_request(
        &self,
        pc_id: u8,
        command: &InMemDicomObject,
        payload: Option<&InMemDicomObject>,
    ) -> Result<()> {
        let pc = self.context(pc_id)?;
        ensure!(pc.scu_role, RoleNotGrantedSnafu { id: pc_id, role: "SCU" });

        let header = CommandHeader::from_command_dataset(command).context(CommandHeaderSnafu)?;
        // C-CANCEL is exempt from id-uniqueness/window bookkeeping (§4.4.3 step 3).
        if header.kind != crate::dimse::CommandKind::CCancelRq {
            if let Some(message_id) = header.message_id {
                let mut bookkeeping = self.bookkeeping.lock().unwrap();
                let limit = self.config.local_max_ops_invoked;
                ensure!(
                    limit == 0 || bookkeeping.waiting.len() < limit as usize,
                    TooManyOperationsInvokedSnafu { limit }
                );
                bookkeeping.waiting.insert(message_id);
            }
        }

        self.send_message(pc_id, command, payload)
    }

    /// Send a DIMSE response (or intermediate/pending notification) over
    /// the given presentation context. Requires this node to have
    /// negotiated the SCP role for the context.
    pub fn send_response(
        &self,
        pc_id: u8,
        command: &InMemDicomObject,
        payload: Option<&InMemDicomObject>,
    ) -> Result<()> {
        let pc = self.context(pc_id)?;
        ensure!(pc.scp_role, RoleNotGrantedSnafu { id: pc_id, role: "SCP" });

        let header = CommandHeader::from_command_dataset(command).context(CommandHeaderSnafu)?;
        if let Some(message_id) = header.message_id_being_responded_to {
            let terminal = !header.status.map(crate::dimse::is_pending).unwrap_or(false);
            if terminal {
                self.bookkeeping.lock().unwrap().processing.remove(&message_id);
            }
        }

        self.send_message(pc_id, command, payload)
    }

    fn send_message(
        &self,
        pc_id: u8,
        command: &InMemDicomObject,
        payload: Option<&InMemDicomObject>,
    ) -> Result<()> {
        let mut command_bytes = Vec::new();
        InMemDatasetCodec::encode_dataset(
            command,
            &IMPLICIT_VR_LITTLE_ENDIAN.erased(),
            &mut command_bytes,
        )
        .context(EncodeDatasetSnafu)?;

        let mut writer = self.writer.lock().unwrap();
        {
            let mut pdv_writer = PDataWriter::new_with_kind(
                &mut *writer,
                pc_id,
                self.config.peer_max_pdu_length,
                true,
            );
            pdv_writer.write_all(&command_bytes).context(IoSnafu)?;
        }

        if let Some(payload) = payload {
            let ts = self.negotiated_ts(pc_id)?;
            let mut payload_bytes = Vec::new();
            InMemDatasetCodec::encode_dataset(payload, &ts, &mut payload_bytes)
                .context(EncodeDatasetSnafu)?;
            let mut pdv_writer = PDataWriter::new_with_kind(
                &mut *writer,
                pc_id,
                self.config.peer_max_pdu_length,
                false,
            );
            pdv_writer.write_all(&payload_bytes).context(IoSnafu)?;
        }

        Ok(())
    }

    /// Block until the next message (request or response) is ready, or
    /// until the association's DIMSE timeout elapses.
    pub fn get_message(&self) -> Result<AssociationMessage> {
        self.wait_for(|inbox| inbox.queue.pop_front())
    }

    /// Block until a response correlated to `message_id` is ready.
    ///
    /// Non-pending (terminal) responses are removed from the outstanding
    /// operations bookkeeping once observed here.
    pub fn get_response(&self, message_id: u16) -> Result<AssociationMessage> {
        let message = self.wait_for(|inbox| {
            let pos = inbox
                .queue
                .iter()
                .position(|m| m.command.message_id_being_responded_to == Some(message_id))?;
            inbox.queue.remove(pos)
        })?;

        if !matches!(message.command.status_type(), Some(crate::dimse::StatusType::Pending)) {
            self.bookkeeping.lock().unwrap().waiting.remove(&message_id);
        }

        Ok(message)
    }

    fn wait_for(
        &self,
        mut pop: impl FnMut(&mut Inbox) -> Option<AssociationMessage>,
    ) -> Result<AssociationMessage> {
        let (lock, cvar) = &*self.inbox;
        let mut guard = lock.lock().unwrap();
        let deadline = self.config.dimse_timeout.map(|d| Instant::now() + d);
        loop {
            if let Some(message) = pop(&mut guard) {
                return Ok(message);
            }
            if let Some(terminal) = guard.terminal.clone() {
                return Err(terminal.into_error());
            }
            guard = match deadline {
                None => cvar.wait(guard).unwrap(),
                Some(dl) => {
                    let now = Instant::now();
                    if now >= dl {
                        // drop the inbox lock before aborting: abort() takes
                        // it again to record the terminal state and notify
                        // other waiters (§5/§7: a DIMSE timeout
                        // aborts with reason service-user).
                        drop(guard);
                        self.abort();
                        return DimseTimeoutSnafu.fail();
                    }
                    cvar.wait_timeout(guard, dl - now).unwrap().0
                }
            };
        }
    }

    /// Gracefully release the association: sends an A-RELEASE-RQ and waits
    /// for the peer's A-RELEASE-RP, observed by the background reader
    /// thread.
    pub fn release(&self) -> Result<()> {
        {
            let mut writer = self.writer.lock().unwrap();
            pdu::write_pdu(&mut *writer, &Pdu::ReleaseRQ).context(SendSnafu)?;
        }

        let (lock, cvar) = &*self.inbox;
        let mut guard = lock.lock().unwrap();
        let deadline = self.config.dimse_timeout.map(|d| Instant::now() + d);
        loop {
            if let Some(terminal) = guard.terminal.clone() {
                return match terminal {
                    Terminal::Released | Terminal::PeerReleased => Ok(()),
                    other => Err(other.into_error()),
                };
            }
            guard = match deadline {
                None => cvar.wait(guard).unwrap(),
                Some(dl) => {
                    let now = Instant::now();
                    ensure!(now < dl, DimseTimeoutSnafu);
                    cvar.wait_timeout(guard, dl - now).unwrap().0
                }
            };
        }
    }

    /// Abruptly abort the association, without waiting for the peer.
    pub fn abort(&self) {
        {
            let mut writer = self.writer.lock().unwrap();
            let _ = pdu::write_pdu(
                &mut *writer,
                &Pdu::AbortRQ {
                    source: AbortRQSource::ServiceUser,
                },
            );
            let _ = writer.close();
        }

        let (lock, cvar) = &*self.inbox;
        let mut guard = lock.lock().unwrap();
        if guard.terminal.is_none() {
            guard.terminal = Some(Terminal::Aborted(AbortRQSource::ServiceUser));
        }
        cvar.notify_all();
    }
}

impl<T: Transport> Drop for AssociationEngine<T> {
    fn drop(&mut self) {
        let already_terminal = {
            let (lock, _) = &*self.inbox;
            lock.lock().unwrap().terminal.is_some()
        };
        if !already_terminal {
            let _ = self.release();
        }
        if let Some(handle) = self.reader_handle.lock().unwrap().take() {
            let _ = handle.join();
        }
    }
}

fn set_terminal(inbox: &(Mutex<Inbox>, Condvar), terminal: Terminal) {
    let (lock, cvar) = inbox;
    let mut guard = lock.lock().unwrap();
    if guard.terminal.is_none() {
        guard.terminal = Some(terminal);
    }
    cvar.notify_all();
}

/// Body of the background reader thread: reads PDUs off the wire, turns
/// P-DATA-TF fragments into whole command/payload data sets, and pushes
/// completed [`AssociationMessage`]s onto the ready queue.
fn run_reader<R, W>(
    mut reader: R,
    max_pdu_length: u32,
    max_ops_performed: u16,
    contexts: Vec<PresentationContextInfo>,
    inbox: Arc<(Mutex<Inbox>, Condvar)>,
    bookkeeping: Arc<Mutex<Bookkeeping>>,
    writer: Arc<Mutex<W>>,
) where
    R: Read,
    W: Write,
{
    let mut reassembler = PdvReassembler::new();
    let mut pending_command: Option<(u8, CommandHeader, InMemDicomObject)> = None;

    loop {
        let pdu = match pdu::read_pdu(&mut reader, max_pdu_length, true) {
            Ok(pdu) => pdu,
            Err(e) => {
                abort_on_corruption(&writer, AbortRQServiceProviderReason::InvalidPduParameter);
                set_terminal(&inbox, Terminal::Error(e.to_string()));
                return;
            }
        };

        match pdu {
            Pdu::PData { data } => {
                reassembler.push_pdata(data);
                let sets = match reassembler.reassemble_all() {
                    Ok(sets) => sets,
                    Err(e) => {
                        abort_on_corruption(&writer, AbortRQServiceProviderReason::InvalidPduParameter);
                        set_terminal(&inbox, Terminal::Error(e.to_string()));
                        return;
                    }
                };

                for set in sets {
                    if let Err(e) = dispatch_dataset(
                        set,
                        &contexts,
                        &mut pending_command,
                        max_ops_performed,
                        &bookkeeping,
                        &inbox,
                    ) {
                        abort_on_corruption(&writer, AbortRQServiceProviderReason::InvalidPduParameter);
                        set_terminal(&inbox, Terminal::Error(e.to_string()));
                        return;
                    }
                }
            }
            Pdu::ReleaseRQ => {
                let mut w = writer.lock().unwrap();
                let _ = pdu::write_pdu(&mut *w, &Pdu::ReleaseRP);
                set_terminal(&inbox, Terminal::PeerReleased);
                return;
            }
            Pdu::ReleaseRP => {
                set_terminal(&inbox, Terminal::Released);
                return;
            }
            Pdu::AbortRQ { source } => {
                set_terminal(&inbox, Terminal::Aborted(source));
                return;
            }
            other => {
                abort_on_corruption(&writer, AbortRQServiceProviderReason::UnexpectedPdu);
                set_terminal(
                    &inbox,
                    Terminal::Error(format!("unexpected PDU during message exchange: {other:?}")),
                );
                return;
            }
        }
    }
}

/// Send an A-ABORT with the given service-provider reason before tearing
/// down the reader thread (§7): wire-level violations discovered by
/// the background reader abort the association rather than leaving it
/// half-open. Best-effort: if the write itself fails the connection is
/// already gone, which is what we were about to report anyway.
fn abort_on_corruption<W: Write>(
    writer: &Arc<Mutex<W>>,
    reason: AbortRQServiceProviderReason,
) {
    let mut w = writer.lock().unwrap();
    let _ = pdu::write_pdu(
        &mut *w,
        &Pdu::AbortRQ {
            source: AbortRQSource::ServiceProvider(reason),
        },
    );
}

/// Enforce the inbound half of §4.4.4 step 4's response/request bookkeeping.
///
/// C-CANCEL (`CommandKind::CCancelRq`) is exempt from id-uniqueness rules
/// (§4.4.3 step 3, mirrored here for the inbound direction) since it may
/// re-use any outstanding message id.
fn check_inbound_bookkeeping(
    header: &CommandHeader,
    max_ops_performed: u16,
    bookkeeping: &Mutex<Bookkeeping>,
) -> Result<()> {
    use crate::dimse::CommandKind;

    if header.kind == CommandKind::CCancelRq {
        return Ok(());
    }

    let mut bookkeeping = bookkeeping.lock().unwrap();
    if header.kind.is_response() {
        if let Some(message_id) = header.message_id_being_responded_to {
            ensure!(
                bookkeeping.waiting.contains(&message_id),
                WrongResponseIdSnafu { message_id }
            );
        }
    } else if let Some(message_id) = header.message_id {
        ensure!(
            !bookkeeping.processing.contains(&message_id),
            WrongCommandIdSnafu { message_id }
        );
        ensure!(
            max_ops_performed == 0 || bookkeeping.processing.len() < max_ops_performed as usize,
            TooManyOperationsPerformedSnafu {
                limit: max_ops_performed
            }
        );
        bookkeeping.processing.insert(message_id);
    }

    Ok(())
}

fn dispatch_dataset(
    set: crate::pdv::ReassembledDataSet,
    contexts: &[PresentationContextInfo],
    pending_command: &mut Option<(u8, CommandHeader, InMemDicomObject)>,
    max_ops_performed: u16,
    bookkeeping: &Mutex<Bookkeeping>,
    inbox: &Arc<(Mutex<Inbox>, Condvar)>,
) -> Result<()> {
    if set.is_command {
        let obj = InMemDatasetCodec::decode_dataset(&set.data, &IMPLICIT_VR_LITTLE_ENDIAN.erased())
            .context(DecodeDatasetSnafu)?;
        let header = CommandHeader::from_command_dataset(&obj).context(CommandHeaderSnafu)?;
        check_inbound_bookkeeping(&header, max_ops_performed, bookkeeping)?;

        if header.has_dataset {
            if let Some((pending_pc_id, ..)) = pending_command {
                return UnexpectedCommandSnafu {
                    pending_pc_id: *pending_pc_id,
                    new_pc_id: set.presentation_context_id,
                }
                .fail();
            }
            *pending_command = Some((set.presentation_context_id, header, obj));
        } else {
            enqueue(inbox, AssociationMessage {
                presentation_context_id: set.presentation_context_id,
                command: header,
                command_dataset: obj,
                payload: None,
            });
        }
    } else {
        let (pc_id, header, command_dataset) = pending_command
            .take()
            .context(UnexpectedPayloadSnafu)?;

        ensure!(
            set.presentation_context_id == pc_id,
            PayloadPresentationContextMismatchSnafu {
                expected: pc_id,
                got: set.presentation_context_id,
            }
        );

        let ts = contexts
            .iter()
            .find(|pc| pc.id == set.presentation_context_id)
            .and_then(|pc| {
                dicom_transfer_syntax_registry::TransferSyntaxRegistry
                    .get(&pc.transfer_syntax)
                    .cloned()
            })
            .unwrap_or_else(|| IMPLICIT_VR_LITTLE_ENDIAN.erased());

        let payload = InMemDatasetCodec::decode_dataset(&set.data, &ts).context(DecodeDatasetSnafu)?;

        enqueue(inbox, AssociationMessage {
            presentation_context_id: pc_id,
            command: header,
            command_dataset,
            payload: Some(payload),
        });
    }

    Ok(())
}

fn enqueue(inbox: &Arc<(Mutex<Inbox>, Condvar)>, message: AssociationMessage) {
    let (lock, cvar) = &**inbox;
    let mut guard = lock.lock().unwrap();
    guard.queue.push_back(message);
    cvar.notify_all();
}
