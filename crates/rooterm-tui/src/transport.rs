//! WebSocket transport.
//!
//! Opens the connection and splits it into independent halves so a pending
//! read never blocks a write. This is a thin layer that just moves frame
//! text; classification happens in the app.

use futures::{
    SinkExt, StreamExt,
    stream::{SplitSink, SplitStream},
};
use thiserror::Error;
use tokio::net::TcpStream;
use tokio_tungstenite::{
    MaybeTlsStream, WebSocketStream, connect_async,
    tungstenite::{self, Message},
};

type WsStream = WebSocketStream<MaybeTlsStream<TcpStream>>;

/// Transport errors.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Connection could not be opened.
    #[error(transparent)]
    Connection(tungstenite::Error),

    /// Read or write on an open connection failed.
    #[error(transparent)]
    Stream(tungstenite::Error),
}

/// Result of reading one frame.
#[derive(Debug)]
pub enum ReadOutcome {
    /// Text frame, or binary frame decoded as lossy UTF-8.
    Frame(String),
    /// Peer sent a close frame or the stream ended.
    Closed,
    /// Reading failed.
    Failed(TransportError),
}

/// Write half of a connection.
pub struct ConnectionWriter {
    sink: SplitSink<WsStream, Message>,
}

/// Read half of a connection.
pub struct ConnectionReader {
    stream: SplitStream<WsStream>,
}

/// Open a WebSocket connection to `endpoint`.
pub async fn connect(
    endpoint: &str,
) -> Result<(ConnectionWriter, ConnectionReader), TransportError> {
    let (ws, _response) = connect_async(endpoint).await.map_err(TransportError::Connection)?;
    tracing::info!("connected to {endpoint}");

    let (sink, stream) = ws.split();
    Ok((ConnectionWriter { sink }, ConnectionReader { stream }))
}

impl ConnectionWriter {
    /// Send one text frame.
    pub async fn write_frame(&mut self, text: String) -> Result<(), TransportError> {
        self.sink.send(Message::text(text)).await.map_err(TransportError::Stream)
    }

    /// Send a close frame. Errors are logged and otherwise ignored.
    pub async fn close(mut self) {
        if let Err(e) = self.sink.close().await {
            tracing::debug!("close failed: {e}");
        }
    }
}

impl ConnectionReader {
    /// Wait for the next data frame.
    ///
    /// Ping and pong frames are skipped; tungstenite queues the pong reply
    /// itself.
    pub async fn read_frame(&mut self) -> ReadOutcome {
        loop {
            match self.stream.next().await {
                Some(Ok(Message::Text(text))) => return ReadOutcome::Frame(text.as_str().to_owned()),
                Some(Ok(Message::Binary(data))) => {
                    return ReadOutcome::Frame(String::from_utf8_lossy(&data).into_owned());
                },
                Some(Ok(Message::Close(_))) | None => return ReadOutcome::Closed,
                Some(Ok(Message::Ping(_) | Message::Pong(_) | Message::Frame(_))) => {},
                Some(Err(e)) => return ReadOutcome::Failed(TransportError::Stream(e)),
            }
        }
    }
}
