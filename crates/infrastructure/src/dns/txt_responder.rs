//! Answers stub resolver queries through `hickory-server`.
//!
//! Names in the record set get their TXT content back, other query types on
//! those names get an empty NOERROR answer, and every other name is NXDOMAIN.

use arc_conformance_domain::TxtRecordSet;
use hickory_proto::op::{Edns, Header, OpCode, Query, ResponseCode};
use hickory_proto::rr::rdata::TXT;
use hickory_proto::rr::{RData, Record, RecordType};
use hickory_proto::serialize::binary::{BinEncodable, BinEncoder};
use hickory_server::authority::MessageResponseBuilder;
use hickory_server::server::{Request, RequestHandler, ResponseHandler, ResponseInfo};
use std::sync::Arc;
use tracing::{debug, error};

pub const TXT_TTL: u32 = 300;

/// Payload size every DNS client must accept over UDP (RFC 1035 §4.2.1).
pub const CLASSIC_UDP_PAYLOAD: usize = 512;

/// Upper bound honoured for EDNS0 advertisements.
pub const MAX_UDP_PAYLOAD: usize = 4096;

/// Longest character-string a TXT record can carry (RFC 1035 §3.3).
const MAX_CHARACTER_STRING: usize = 255;

const HEADER_LEN: usize = 12;

#[derive(Clone)]
pub struct TxtRequestHandler {
    records: Arc<TxtRecordSet>,
}

impl TxtRequestHandler {
    pub fn new(records: Arc<TxtRecordSet>) -> Self {
        Self { records }
    }

    /// Response code and answers for one question.
    pub fn resolve(records: &TxtRecordSet, query: &Query) -> (ResponseCode, Vec<Record>) {
        let name = query.name().to_utf8();
        let query_type = query.query_type();

        match records.lookup(&name) {
            None => {
                debug!(name = %name, record_type = ?query_type, "NXDOMAIN");
                (ResponseCode::NXDomain, Vec::new())
            }
            Some(content) if query_type == RecordType::TXT => {
                debug!(name = %name, bytes = content.len(), "TXT answer");
                let rdata = RData::TXT(TXT::new(split_character_strings(content)));
                let record = Record::from_rdata(query.name().clone(), TXT_TTL, rdata);
                (ResponseCode::NoError, vec![record])
            }
            Some(_) => {
                debug!(name = %name, record_type = ?query_type, "NODATA");
                (ResponseCode::NoError, Vec::new())
            }
        }
    }
}

#[async_trait::async_trait]
impl RequestHandler for TxtRequestHandler {
    async fn handle_request<R: ResponseHandler>(
        &self,
        request: &Request,
        mut response_handle: R,
    ) -> ResponseInfo {
        let request_info = match request.request_info() {
            Ok(info) => info,
            Err(e) => {
                debug!(error = %e, "Rejecting query without a single question");
                return send_response(request, &mut response_handle, ResponseCode::FormErr, &[])
                    .await;
            }
        };

        if request.header().op_code() != OpCode::Query {
            return send_response(request, &mut response_handle, ResponseCode::NotImp, &[]).await;
        }

        let query = request_info.query.original();
        let (code, answers) = Self::resolve(&self.records, query);

        if request_info.protocol.is_datagram() {
            let limit = udp_payload_limit(request.edns());
            match encoded_len(query, &answers) {
                Some(size) if size <= limit => {}
                size => {
                    debug!(size = ?size, limit, "Response too large for UDP, truncating");
                    return send_truncated(request, &mut response_handle).await;
                }
            }
        }

        send_response(request, &mut response_handle, code, &answers).await
    }
}

/// UDP response size the client can take: 512 unless it advertised more over
/// EDNS0, capped at [`MAX_UDP_PAYLOAD`].
pub fn udp_payload_limit(edns: Option<&Edns>) -> usize {
    edns.map(|e| (e.max_payload() as usize).clamp(CLASSIC_UDP_PAYLOAD, MAX_UDP_PAYLOAD))
        .unwrap_or(CLASSIC_UDP_PAYLOAD)
}

/// Splits TXT content into character-strings of at most 255 bytes without
/// cutting through a UTF-8 sequence.
pub fn split_character_strings(content: &str) -> Vec<String> {
    if content.is_empty() {
        return vec![String::new()];
    }

    let mut chunks = Vec::new();
    let mut rest = content;
    while !rest.is_empty() {
        let mut end = rest.len().min(MAX_CHARACTER_STRING);
        while !rest.is_char_boundary(end) {
            end -= 1;
        }
        let (chunk, tail) = rest.split_at(end);
        chunks.push(chunk.to_string());
        rest = tail;
    }
    chunks
}

/// Wire size of a response carrying `query` and `answers`.
fn encoded_len(query: &Query, answers: &[Record]) -> Option<usize> {
    let mut buf = Vec::with_capacity(CLASSIC_UDP_PAYLOAD);
    let mut encoder = BinEncoder::new(&mut buf);
    query.emit(&mut encoder).ok()?;
    for record in answers {
        record.emit(&mut encoder).ok()?;
    }
    Some(HEADER_LEN + buf.len())
}

fn response_header(request: &Request, code: ResponseCode) -> Header {
    let mut header = Header::response_from_request(request.header());
    header.set_authoritative(true);
    header.set_response_code(code);
    header
}

async fn send_response<R: ResponseHandler>(
    request: &Request,
    response_handle: &mut R,
    code: ResponseCode,
    answers: &[Record],
) -> ResponseInfo {
    let builder = MessageResponseBuilder::from_message_request(request);
    let header = response_header(request, code);
    let response = builder.build(header, answers.iter(), &[], &[], &[]);

    match response_handle.send_response(response).await {
        Ok(info) => info,
        Err(e) => {
            error!(error = %e, "Failed to send response");
            ResponseInfo::from(*request.header())
        }
    }
}

async fn send_truncated<R: ResponseHandler>(
    request: &Request,
    response_handle: &mut R,
) -> ResponseInfo {
    let builder = MessageResponseBuilder::from_message_request(request);
    let mut header = response_header(request, ResponseCode::NoError);
    header.set_truncated(true);
    let response = builder.build(header, &[], &[], &[], &[]);

    match response_handle.send_response(response).await {
        Ok(info) => info,
        Err(e) => {
            error!(error = %e, "Failed to send truncated response");
            ResponseInfo::from(*request.header())
        }
    }
}
