//! Java edition server list ping: handshake, status request, then a ping
//! round trip for latency.

use std::time::{Duration, Instant};

use anyhow::{Context as _, bail, ensure};
use serde::Deserialize;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tokio::net::TcpStream;

pub const DEFAULT_PORT: u16 = 25565;

/// Upper bound for connect plus the whole exchange.
pub const STATUS_TIMEOUT: Duration = Duration::from_secs(5);

// Servers answer status requests for any protocol number.
const PROTOCOL_VERSION: i32 = 47;
const NEXT_STATE_STATUS: i32 = 1;
const PACKET_STATUS: i32 = 0x00;
const PACKET_PING: i32 = 0x01;
const MAX_PACKET_LEN: i32 = 1 << 21;

#[derive(Clone, Debug, Deserialize)]
pub struct ServerStatus {
    pub version: ServerVersion,
    pub players: ServerPlayers,
    #[serde(skip)]
    pub latency: Duration,
}

#[derive(Clone, Debug, Deserialize)]
pub struct ServerVersion {
    pub name: String,
    #[serde(default)]
    pub protocol: i64,
}

#[derive(Clone, Debug, Deserialize)]
pub struct ServerPlayers {
    pub online: u32,
    pub max: u32,
    #[serde(default)]
    pub sample: Vec<PlayerSample>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct PlayerSample {
    pub name: String,
}

/// Connect to `host:port` and query its status within `STATUS_TIMEOUT`.
pub async fn check_server(host: &str, port: u16) -> anyhow::Result<ServerStatus> {
    tokio::time::timeout(STATUS_TIMEOUT, async {
        let mut stream = TcpStream::connect((host, port))
            .await
            .with_context(|| format!("could not connect to {host}:{port}"))?;
        stream.set_nodelay(true)?;
        query_status(&mut stream, host, port).await
    })
    .await
    .with_context(|| format!("{host}:{port} did not answer within {}s", STATUS_TIMEOUT.as_secs()))?
}

/// Run the status exchange over an already connected stream.
pub async fn query_status<S>(stream: &mut S, host: &str, port: u16) -> anyhow::Result<ServerStatus>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    let mut handshake = Vec::with_capacity(host.len() + 8);
    write_varint(&mut handshake, PROTOCOL_VERSION);
    write_string(&mut handshake, host)?;
    handshake.extend_from_slice(&port.to_be_bytes());
    write_varint(&mut handshake, NEXT_STATE_STATUS);

    let mut out = frame(0x00, &handshake)?;
    out.extend(frame(PACKET_STATUS, &[])?);
    stream.write_all(&out).await?;
    stream.flush().await?;

    let (packet_id, body) = read_packet(stream).await?;
    ensure!(packet_id == PACKET_STATUS, "unexpected status packet id {packet_id:#04x}");
    let mut body = body.as_slice();
    let json_len = read_len(&mut body).await?;
    ensure!(json_len <= body.len(), "status response is truncated");
    let mut status: ServerStatus =
        serde_json::from_slice(&body[..json_len]).context("malformed status response")?;

    let payload = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as i64)
        .unwrap_or_default();
    let sent_at = Instant::now();
    stream
        .write_all(&frame(PACKET_PING, &payload.to_be_bytes())?)
        .await?;
    stream.flush().await?;

    let (packet_id, body) = read_packet(stream).await?;
    status.latency = sent_at.elapsed();
    ensure!(packet_id == PACKET_PING, "unexpected pong packet id {packet_id:#04x}");
    ensure!(body == payload.to_be_bytes(), "pong payload does not match");

    Ok(status)
}

fn write_varint(buf: &mut Vec<u8>, value: i32) {
    let mut value = value as u32;
    loop {
        if value & !0x7f == 0 {
            buf.push(value as u8);
            return;
        }
        buf.push((value & 0x7f) as u8 | 0x80);
        value >>= 7;
    }
}

async fn read_varint<S>(stream: &mut S) -> anyhow::Result<i32>
where
    S: AsyncRead + Unpin,
{
    let mut value = 0u32;
    for position in 0..5 {
        let byte = stream.read_u8().await.context("connection closed mid-packet")?;
        value |= u32::from(byte & 0x7f) << (7 * position);
        if byte & 0x80 == 0 {
            return Ok(value as i32);
        }
    }
    bail!("varint is longer than five bytes")
}

async fn read_len<S>(stream: &mut S) -> anyhow::Result<usize>
where
    S: AsyncRead + Unpin,
{
    let len = read_varint(stream).await?;
    ensure!((0..=MAX_PACKET_LEN).contains(&len), "length {len} out of range");
    Ok(usize::try_from(len)?)
}

fn write_string(buf: &mut Vec<u8>, value: &str) -> anyhow::Result<()> {
    write_varint(buf, i32::try_from(value.len()).context("string too long")?);
    buf.extend_from_slice(value.as_bytes());
    Ok(())
}

/// Length-prefixed packet: `len(id + body) | id | body`.
fn frame(packet_id: i32, body: &[u8]) -> anyhow::Result<Vec<u8>> {
    let mut id = Vec::with_capacity(5);
    write_varint(&mut id, packet_id);

    let mut out = Vec::with_capacity(body.len() + 10);
    write_varint(&mut out, i32::try_from(id.len() + body.len()).context("packet too long")?);
    out.extend_from_slice(&id);
    out.extend_from_slice(body);
    Ok(out)
}

async fn read_packet<S>(stream: &mut S) -> anyhow::Result<(i32, Vec<u8>)>
where
    S: AsyncRead + Unpin,
{
    let len = read_len(stream).await?;
    ensure!(len > 0, "empty packet");

    let mut packet = vec![0u8; len];
    stream.read_exact(&mut packet).await?;

    let mut body = packet.as_slice();
    let packet_id = read_varint(&mut body).await?;
    Ok((packet_id, body.to_vec()))
}

#[cfg(test)]
mod tests {
    use tokio::io::{AsyncReadExt, AsyncWriteExt, DuplexStream};

    use super::{
        ServerStatus, frame, query_status, read_len, read_packet, read_varint, write_string,
        write_varint,
    };

    fn varint(value: i32) -> Vec<u8> {
        let mut buf = Vec::new();
        write_varint(&mut buf, value);
        buf
    }

    #[test]
    fn encodes_varints() {
        assert_eq!(varint(0), [0x00]);
        assert_eq!(varint(127), [0x7f]);
        assert_eq!(varint(128), [0x80, 0x01]);
        assert_eq!(varint(25565), [0xdd, 0xc7, 0x01]);
        assert_eq!(varint(-1), [0xff, 0xff, 0xff, 0xff, 0x0f]);
    }

    #[tokio::test]
    async fn decodes_varints_and_rejects_overlong_ones() {
        assert_eq!(read_varint(&mut &[0xdd, 0xc7, 0x01][..]).await.unwrap(), 25565);
        assert_eq!(read_varint(&mut &varint(-1)[..]).await.unwrap(), -1);
        assert!(read_varint(&mut &[0x80, 0x80, 0x80, 0x80, 0x80, 0x01][..]).await.is_err());
        assert!(read_varint(&mut &[0x80][..]).await.is_err());
        assert!(read_len(&mut &varint(-5)[..]).await.is_err());
    }

    async fn fake_server(mut stream: DuplexStream, status_json: &str, echo_pong: bool) {
        let (id, handshake) = read_packet(&mut stream).await.unwrap();
        assert_eq!(id, 0x00);
        let mut expected = Vec::new();
        write_varint(&mut expected, 47);
        write_string(&mut expected, "mc.example.net").unwrap();
        expected.extend_from_slice(&25570u16.to_be_bytes());
        write_varint(&mut expected, 1);
        assert_eq!(handshake, expected);

        let (id, request) = read_packet(&mut stream).await.unwrap();
        assert_eq!((id, request.len()), (0x00, 0));

        let mut body = Vec::new();
        write_string(&mut body, status_json).unwrap();
        stream.write_all(&frame(0x00, &body).unwrap()).await.unwrap();

        let (id, payload) = read_packet(&mut stream).await.unwrap();
        assert_eq!((id, payload.len()), (0x01, 8));
        if echo_pong {
            stream.write_all(&frame(0x01, &payload).unwrap()).await.unwrap();
        } else {
            stream.shutdown().await.unwrap();
            let mut rest = Vec::new();
            let _ = stream.read_to_end(&mut rest).await;
        }
    }

    #[tokio::test]
    async fn reads_status_and_latency_from_a_server() {
        let (mut client, server) = tokio::io::duplex(4096);
        let json = r#"{
            "version": {"name": "Paper 1.21.1", "protocol": 767},
            "players": {"max": 20, "online": 2, "sample": [
                {"name": "alex", "id": "4566e69f-c907-48ee-8d71-d7ba5aa00d20"},
                {"name": "steve", "id": "8667ba71-b85a-4004-af54-457a9734eed7"}
            ]},
            "description": {"text": "A Cobble server"},
            "enforcesSecureChat": true
        }"#;
        let server = tokio::spawn(fake_server(server, json, true));

        let status = query_status(&mut client, "mc.example.net", 25570).await.unwrap();
        server.await.unwrap();

        assert_eq!(status.version.name, "Paper 1.21.1");
        assert_eq!(status.version.protocol, 767);
        assert_eq!((status.players.online, status.players.max), (2, 20));
        let names: Vec<_> = status.players.sample.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["alex", "steve"]);
    }

    #[tokio::test]
    async fn dropped_pong_is_an_error() {
        let (mut client, server) = tokio::io::duplex(4096);
        let json = r#"{"version":{"name":"1.20.4"},"players":{"max":10,"online":0}}"#;
        let server = tokio::spawn(fake_server(server, json, false));

        let result = query_status(&mut client, "mc.example.net", 25570).await;
        drop(client);
        server.await.unwrap();
        assert!(result.is_err());
    }

    #[test]
    fn sample_defaults_to_empty() {
        let status: ServerStatus =
            serde_json::from_str(r#"{"version":{"name":"1.8.9"},"players":{"max":5,"online":1}}"#)
                .unwrap();
        assert!(status.players.sample.is_empty());
        assert_eq!(status.version.protocol, 0);
    }

    #[tokio::test]
    async fn garbage_status_is_rejected() {
        let (mut client, mut server) = tokio::io::duplex(4096);
        let server = tokio::spawn(async move {
            let _ = read_packet(&mut server).await;
            let _ = read_packet(&mut server).await;
            let mut body = Vec::new();
            write_string(&mut body, "<html>not minecraft</html>").unwrap();
            server.write_all(&frame(0x00, &body).unwrap()).await.unwrap();
        });

        let error = query_status(&mut client, "mc.example.net", 25570).await.unwrap_err();
        server.await.unwrap();
        assert!(error.to_string().contains("malformed status response"));
    }
}
