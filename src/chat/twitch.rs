//! Twitch chat adapter: anonymous IRC over TCP.
//!
//! Twitch chat is plain IRC. Reading requires no account: a `justinfan`
//! nick authenticates anonymously, `JOIN #channel` subscribes, and every
//! `PRIVMSG` line is a chat message. The server's periodic `PING` must
//! be answered or the connection is dropped.

use futures::{SinkExt, StreamExt};
use rand::Rng;
use tokio::net::TcpStream;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio_util::codec::{Framed, LinesCodec};
use tracing::{debug, info, warn};

use crate::chat::{make_event, ChatHandle, CONNECT_TIMEOUT};
use crate::common::error::TransportError;
use crate::common::{GuessEvent, Platform};

const IRC_HOST: &str = "irc.chat.twitch.tv";
const IRC_PORT: u16 = 6667;
const MAX_LINE_LENGTH: usize = 8192;

type IrcStream = Framed<TcpStream, LinesCodec>;

/// Connect anonymously and join the channel's chat.
pub async fn connect(
    channel: &str,
) -> Result<(UnboundedReceiver<GuessEvent>, ChatHandle), TransportError> {
    let channel = channel.to_lowercase();

    let stream = tokio::time::timeout(CONNECT_TIMEOUT, TcpStream::connect((IRC_HOST, IRC_PORT)))
        .await
        .map_err(|_| TransportError::ConnectTimeout {
            endpoint: format!("{IRC_HOST}:{IRC_PORT}"),
            seconds: CONNECT_TIMEOUT.as_secs(),
        })??;

    let mut irc = Framed::new(stream, LinesCodec::new_with_max_length(MAX_LINE_LENGTH));

    // Anonymous login: any justinfan nick is accepted without a password.
    let nick = format!("justinfan{}", rand::thread_rng().gen_range(10_000..100_000));
    irc.send(format!("NICK {nick}")).await?;
    irc.send(format!("JOIN #{channel}")).await?;

    info!("Connected to Twitch chat as {}, joining #{}", nick, channel);

    let (tx, rx) = mpsc::unbounded_channel();
    let task = tokio::spawn(read_loop(irc, tx));
    Ok((rx, ChatHandle::new(task)))
}

/// Pump IRC lines into guess events until the socket or the receiver
/// goes away. A bad line is logged and skipped, never fatal.
async fn read_loop(mut irc: IrcStream, tx: UnboundedSender<GuessEvent>) {
    while let Some(line) = irc.next().await {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                warn!("Dropping unreadable IRC line: {}", e);
                continue;
            }
        };

        if let Some(payload) = line.strip_prefix("PING") {
            if let Err(e) = irc.send(format!("PONG{payload}")).await {
                warn!("Failed to answer IRC PING: {}", e);
                break;
            }
            continue;
        }

        if let Some((username, text)) = parse_privmsg(&line) {
            if let Some(event) = make_event(Platform::Twitch, username, text) {
                if tx.send(event).is_err() {
                    debug!("Guess receiver dropped, closing Twitch stream");
                    break;
                }
            }
        }
    }
    info!("Twitch chat stream ended");
}

/// Extract `(nick, message)` from a PRIVMSG line:
/// `:nick!user@host PRIVMSG #channel :message text`
/// An optional IRCv3 tag prefix (`@k=v;... `) is skipped.
fn parse_privmsg(line: &str) -> Option<(&str, &str)> {
    let line = if line.starts_with('@') {
        line.split_once(' ')?.1
    } else {
        line
    };
    let rest = line.strip_prefix(':')?;
    let (prefix, rest) = rest.split_once(' ')?;
    let nick = prefix.split('!').next().unwrap_or(prefix);
    let rest = rest.strip_prefix("PRIVMSG ")?;
    let (_target, text) = rest.split_once(" :")?;
    Some((nick, text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_privmsg() {
        let line = ":viewer1!viewer1@viewer1.tmi.twitch.tv PRIVMSG #bobross :apple";
        assert_eq!(parse_privmsg(line), Some(("viewer1", "apple")));
    }

    #[test]
    fn test_parse_privmsg_keeps_full_text() {
        let line = ":v!v@v.tmi.twitch.tv PRIVMSG #bobross :hello there : everyone";
        assert_eq!(parse_privmsg(line), Some(("v", "hello there : everyone")));
    }

    #[test]
    fn test_parse_privmsg_with_tags_prefix() {
        let line = "@badge-info=;color=#FF0000 :v!v@v.tmi.twitch.tv PRIVMSG #bobross :apple";
        assert_eq!(parse_privmsg(line), Some(("v", "apple")));
    }

    #[test]
    fn test_parse_ignores_other_commands() {
        assert_eq!(parse_privmsg(":tmi.twitch.tv 001 justinfan123 :Welcome"), None);
        assert_eq!(parse_privmsg("PING :tmi.twitch.tv"), None);
        assert_eq!(parse_privmsg(":v!v@v.tmi.twitch.tv JOIN #bobross"), None);
    }

    #[test]
    fn test_parse_privmsg_garbage_is_none() {
        assert_eq!(parse_privmsg(""), None);
        assert_eq!(parse_privmsg("not an irc line"), None);
    }
}
