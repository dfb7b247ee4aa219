//! Docker log stream demultiplexing
//!
//! Containers started without a TTY return logs as a multiplexed stream: every frame
//! carries an 8-byte header `[stream, 0, 0, 0, len_be_u32]` followed by `len` bytes of
//! payload. TTY containers return the raw text instead.

const HEADER_LEN: usize = 8;

fn is_frame_header(bytes: &[u8]) -> bool {
    bytes.len() >= HEADER_LEN && bytes[0] <= 2 && bytes[1..4] == [0, 0, 0]
}

/// Split a Docker logs body into lines.
///
/// A truncated final frame keeps whatever payload is available.
pub fn demux_log_stream(body: &[u8]) -> Vec<String> {
    if !is_frame_header(body) {
        return split_lines(body);
    }

    let mut payload = Vec::with_capacity(body.len());
    let mut rest = body;

    while !rest.is_empty() {
        if !is_frame_header(rest) {
            // Not a frame boundary: keep the remainder as plain text
            payload.extend_from_slice(rest);
            break;
        }

        let len = u32::from_be_bytes([rest[4], rest[5], rest[6], rest[7]]) as usize;
        let end = HEADER_LEN.saturating_add(len).min(rest.len());
        payload.extend_from_slice(&rest[HEADER_LEN..end]);
        rest = &rest[end..];
    }

    split_lines(&payload)
}

fn split_lines(bytes: &[u8]) -> Vec<String> {
    String::from_utf8_lossy(bytes)
        .lines()
        .map(|line| line.trim_end_matches('\r').to_string())
        .filter(|line| !line.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn frame(stream: u8, payload: &str) -> Vec<u8> {
        let mut out = vec![stream, 0, 0, 0];
        out.extend_from_slice(&(payload.len() as u32).to_be_bytes());
        out.extend_from_slice(payload.as_bytes());
        out
    }

    #[test]
    fn demuxes_stdout_and_stderr_frames() {
        let mut body = frame(1, "2023-05-17T13:45:32Z INFO Starting service\n");
        body.extend(frame(2, "2023-05-17T13:45:33Z WARN Slow disk\n"));
        body.extend(frame(1, "2023-05-17T13:45:34Z INFO Ready\n"));

        let lines = demux_log_stream(&body);
        assert_eq!(
            lines,
            vec![
                "2023-05-17T13:45:32Z INFO Starting service",
                "2023-05-17T13:45:33Z WARN Slow disk",
                "2023-05-17T13:45:34Z INFO Ready",
            ]
        );
    }

    #[test]
    fn frames_may_split_a_line() {
        let mut body = frame(1, "partial ");
        body.extend(frame(1, "line\nnext\n"));
        assert_eq!(demux_log_stream(&body), vec!["partial line", "next"]);
    }

    #[test]
    fn tty_output_is_split_directly() {
        let body = b"first line\r\nsecond line\n\nthird";
        assert_eq!(
            demux_log_stream(body),
            vec!["first line", "second line", "third"]
        );
    }

    #[test]
    fn truncated_frame_keeps_available_bytes() {
        let mut body = frame(1, "complete\n");
        let mut cut = frame(1, "truncated tail\n");
        cut.truncate(HEADER_LEN + 9);
        body.extend(cut);
        assert_eq!(demux_log_stream(&body), vec!["complete", "truncated"]);
    }

    proptest! {
        #[test]
        fn never_panics_on_arbitrary_bytes(body in proptest::collection::vec(any::<u8>(), 0..512)) {
            let lines = demux_log_stream(&body);
            prop_assert!(lines.iter().all(|l| !l.is_empty()));
        }
    }
}
