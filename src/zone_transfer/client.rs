//! AXFR client.
//!
//! The request is a single DNS query of type AXFR sent over TCP with the usual
//! two-byte length prefix. The server streams back one or more response
//! messages; the transfer is complete when the zone's SOA record has been seen a
//! second time.

use std::future::Future;
use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;

use hickory_resolver::proto::op::{Message, MessageType, OpCode, Query, ResponseCode};
use hickory_resolver::proto::rr::{Name, RecordType as ProtoRecordType};
use hickory_resolver::TokioAsyncResolver;
use log::{debug, warn};
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;

use crate::config::{DNS_TCP_PORT, MAX_ZONE_TRANSFER_RECORDS};
use crate::error_handling::TransferError;

/// A zone transfer client: one attempt, the zone's records or a failure.
pub trait ZoneTransfer: Send + Sync + 'static {
    /// Requests the full zone for `domain` from `nameserver`.
    ///
    /// Returns the zone as text lines, one record per line.
    fn transfer(
        &self,
        nameserver: &str,
        domain: &str,
    ) -> impl Future<Output = Result<Vec<String>, TransferError>> + Send;
}

impl<T: ZoneTransfer> ZoneTransfer for Arc<T> {
    async fn transfer(&self, nameserver: &str, domain: &str) -> Result<Vec<String>, TransferError> {
        self.as_ref().transfer(nameserver, domain).await
    }
}

/// [`ZoneTransfer`] that speaks AXFR over TCP.
///
/// Nameserver hostnames are resolved through the shared resolver; a nameserver
/// given as an IP literal is used directly.
#[derive(Clone)]
pub struct AxfrClient {
    resolver: Arc<TokioAsyncResolver>,
    max_records: usize,
}

impl AxfrClient {
    pub fn new(resolver: Arc<TokioAsyncResolver>) -> Self {
        Self {
            resolver,
            max_records: MAX_ZONE_TRANSFER_RECORDS,
        }
    }

    async fn nameserver_address(&self, nameserver: &str) -> Result<IpAddr, TransferError> {
        if let Ok(ip) = nameserver.parse::<IpAddr>() {
            return Ok(ip);
        }
        let response = self
            .resolver
            .lookup_ip(nameserver)
            .await
            .map_err(|e| TransferError::Setup(format!("{nameserver}: {e}")))?;
        response
            .iter()
            .next()
            .ok_or_else(|| TransferError::Setup(format!("{nameserver}: no IP addresses found")))
    }
}

impl ZoneTransfer for AxfrClient {
    async fn transfer(&self, nameserver: &str, domain: &str) -> Result<Vec<String>, TransferError> {
        let ip = self.nameserver_address(nameserver).await?;
        let (id, query) = build_axfr_query(domain)?;

        debug!("Requesting AXFR of {domain} from {nameserver} ({ip})");
        let mut stream = TcpStream::connect(SocketAddr::new(ip, DNS_TCP_PORT)).await?;
        stream.write_all(&frame(&query)).await?;
        stream.flush().await?;

        read_axfr(&mut stream, id, self.max_records).await
    }
}

/// Builds the AXFR query for `domain`, returning its message id and wire bytes.
pub(crate) fn build_axfr_query(domain: &str) -> Result<(u16, Vec<u8>), TransferError> {
    let zone = Name::from_utf8(domain)?;
    let id = rand::random::<u16>();

    let mut message = Message::new();
    message
        .set_id(id)
        .set_message_type(MessageType::Query)
        .set_op_code(OpCode::Query)
        .set_recursion_desired(false);
    message.add_query(Query::query(zone, ProtoRecordType::AXFR));

    Ok((id, message.to_vec()?))
}

/// Prefixes a DNS message with its length, as DNS over TCP requires.
pub(crate) fn frame(message: &[u8]) -> Vec<u8> {
    let mut framed = Vec::with_capacity(message.len() + 2);
    framed.extend_from_slice(&(message.len() as u16).to_be_bytes());
    framed.extend_from_slice(message);
    framed
}

/// Reads AXFR response messages until the closing SOA.
///
/// The first record must be the zone's SOA; the closing copy is not returned.
/// A non-NOERROR response code at any point is a refusal. Transfers larger than
/// `max_records` are cut short and returned as-is: the server has already shown
/// it permits the transfer.
pub(crate) async fn read_axfr<R: AsyncRead + Unpin>(
    reader: &mut R,
    expected_id: u16,
    max_records: usize,
) -> Result<Vec<String>, TransferError> {
    let mut lines = Vec::new();
    let mut soa_seen = 0usize;

    loop {
        let len = match reader.read_u16().await {
            Ok(len) => len as usize,
            Err(e) if e.kind() == std::io::ErrorKind::UnexpectedEof => {
                return Err(TransferError::Malformed(
                    "stream closed before closing SOA".to_string(),
                ));
            }
            Err(e) => return Err(e.into()),
        };
        let mut buffer = vec![0u8; len];
        reader.read_exact(&mut buffer).await?;

        let response = Message::from_vec(&buffer)?;
        if response.id() != expected_id {
            return Err(TransferError::Malformed(format!(
                "response id {} does not match query id {expected_id}",
                response.id()
            )));
        }
        if response.response_code() != ResponseCode::NoError {
            return Err(TransferError::Refused(response.response_code()));
        }
        if response.answers().is_empty() {
            return Err(TransferError::Malformed("response without records".to_string()));
        }

        for record in response.answers() {
            if record.record_type() == ProtoRecordType::SOA {
                soa_seen += 1;
                // The closing SOA repeats the opening one
                if soa_seen >= 2 {
                    return Ok(lines);
                }
            } else if lines.is_empty() {
                return Err(TransferError::Malformed(format!(
                    "transfer starts with {} instead of SOA",
                    record.record_type()
                )));
            }
            lines.push(record.to_string());

            if lines.len() >= max_records {
                warn!("Zone transfer truncated at {max_records} records");
                return Ok(lines);
            }
        }
    }
}
