use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use crate::helpers::AgentError;

pub const PROMPT: &str = "> ";

/// Receives each line typed at the prompt. A returned string is written back
/// to the user followed by a newline.
#[allow(async_fn_in_trait)]
pub trait Handler {
	async fn handle(&mut self, input: &str) -> Result<Option<String>, AgentError>;
}

/// Accepts input and does nothing with it yet.
// TODO: replace with a handler that sends the line to the model and prints the reply
pub struct Placeholder;

impl Handler for Placeholder {
	async fn handle(&mut self, input: &str) -> Result<Option<String>, AgentError> {
		log::debug!("discarding {} byte(s) of input", input.len());
		Ok(None)
	}
}

/// Prompt, read a line, dispatch it, until `input` is exhausted. Returns the
/// number of lines handed to `handler`.
pub async fn run_loop<R, W, H>(mut input: R, mut output: W, handler: &mut H) -> Result<usize, AgentError>
where
	R: AsyncBufRead + Unpin,
	W: AsyncWrite + Unpin,
	H: Handler,
{
	let mut dispatched = 0;
	let mut line = String::new();
	loop {
		output.write_all(PROMPT.as_bytes()).await?;
		output.flush().await?;

		line.clear();
		if input.read_line(&mut line).await? == 0 {
			break;
		}
		let text = line.strip_suffix('\n').unwrap_or(&line);
		let text = text.strip_suffix('\r').unwrap_or(text);

		if let Some(reply) = handler.handle(text).await? {
			output.write_all(reply.as_bytes()).await?;
			output.write_all(b"\n").await?;
		}
		dispatched += 1;
	}
	log::debug!("end of input after {} line(s)", dispatched);
	Ok(dispatched)
}
