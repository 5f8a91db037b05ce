use hickory_proto::op::{Message, MessageType, OpCode, Query};
use hickory_proto::rr::{Name, RData, Record, RecordType};
use hickory_proto::serialize::binary::{BinEncodable, BinEncoder};
use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpStream, UdpSocket};

const CLIENT_TIMEOUT: Duration = Duration::from_secs(2);

pub fn txt_query(id: u16, name: &str, record_type: RecordType) -> Vec<u8> {
    let mut message = Message::new(id, MessageType::Query, OpCode::Query);
    message.set_recursion_desired(true);

    let mut query = Query::new();
    query.set_name(Name::from_str(name).unwrap());
    query.set_query_type(record_type);
    message.add_query(query);

    let mut buf = Vec::with_capacity(512);
    let mut encoder = BinEncoder::new(&mut buf);
    message.emit(&mut encoder).unwrap();
    buf
}

/// Appends an OPT record advertising `payload` bytes to an encoded query.
pub fn with_edns_payload(mut query: Vec<u8>, payload: u16) -> Vec<u8> {
    query[10] = 0x00;
    query[11] = 0x01;
    query.push(0x00);
    query.extend_from_slice(&41u16.to_be_bytes());
    query.extend_from_slice(&payload.to_be_bytes());
    query.extend_from_slice(&[0, 0, 0, 0, 0, 0]);
    query
}

pub async fn query_udp(server: SocketAddr, query: &[u8]) -> Option<Message> {
    let socket = UdpSocket::bind("127.0.0.1:0").await.unwrap();
    socket.send_to(query, server).await.unwrap();

    let mut buf = vec![0u8; 4096];
    match tokio::time::timeout(CLIENT_TIMEOUT, socket.recv_from(&mut buf)).await {
        Ok(Ok((n, _))) => Some(Message::from_vec(&buf[..n]).unwrap()),
        _ => None,
    }
}

pub async fn query_tcp(server: SocketAddr, query: &[u8]) -> Message {
    let mut stream = TcpStream::connect(server).await.unwrap();
    stream
        .write_all(&(query.len() as u16).to_be_bytes())
        .await
        .unwrap();
    stream.write_all(query).await.unwrap();

    let len = tokio::time::timeout(CLIENT_TIMEOUT, stream.read_u16())
        .await
        .unwrap()
        .unwrap();
    let mut buf = vec![0u8; len as usize];
    stream.read_exact(&mut buf).await.unwrap();
    Message::from_vec(&buf).unwrap()
}

/// Concatenated character-strings of a TXT answer.
pub fn txt_data(record: &Record) -> Option<String> {
    match record.data() {
        RData::TXT(txt) => Some(
            txt.txt_data()
                .iter()
                .map(|chunk| String::from_utf8_lossy(chunk).into_owned())
                .collect(),
        ),
        _ => None,
    }
}
