use crate::context::TraceContext;

/// Query parameter the relay token travels in. The legacy boundary echoes
/// query strings verbatim even though it strips propagation headers.
pub const RELAY_PARAM: &str = "app_trace_ref";

/// Literal prefix of the reversal event message. An external
/// trace-reconciliation consumer matches on this byte-for-byte to invert
/// the caller/callee edge when stitching the broken segment back in.
pub const CALLER_MARKER: &str = "Caller: ";

/// Encodes a context snapshot into the fixed relay token layout:
/// `00-{trace_id:32 hex}-{span_id:16 hex}-01`.
///
/// The layout is W3C-traceparent compatible, with the sampled flag pinned
/// to `01` so the far side never discards the restored segment.
pub fn encode(ctx: &TraceContext) -> String {
    format!("00-{:032x}-{:016x}-01", ctx.trace_id, ctx.span_id)
}

/// Decodes a relay token back into a trace context.
///
/// Returns `None` for anything that fails the fixed-layout parse: wrong
/// segment count, wrong segment lengths, non-hex identifier bytes. The
/// relay is best-effort and a bad token must never abort the request
/// carrying it.
pub fn decode(raw: &str) -> Option<TraceContext> {
    let parts: Vec<&str> = raw.split('-').collect();
    if parts.len() != 4 {
        return None;
    }
    let (version, trace_hex, span_hex, flags) = (parts[0], parts[1], parts[2], parts[3]);
    if version.len() != 2 || flags.len() != 2 {
        return None;
    }
    if trace_hex.len() != 32 || span_hex.len() != 16 {
        return None;
    }
    if !is_hex(trace_hex) || !is_hex(span_hex) {
        return None;
    }

    let trace_id = u128::from_str_radix(trace_hex, 16).ok()?;
    let span_id = u64::from_str_radix(span_hex, 16).ok()?;
    Some(TraceContext::new(trace_id, span_id))
}

fn is_hex(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_hexdigit())
}

/// Reconstructs trace provenance from a relayed token on the receiving
/// side of the boundary.
///
/// On a valid token this records the raw token on the current span as
/// `restored_trace_parent` (the span must declare that field, typically
/// via `tracing::instrument(fields(restored_trace_parent = Empty))`) and
/// emits the reversal event naming `peer`, the immediate infrastructure
/// caller. On a missing or malformed token the request simply continues
/// untraced.
pub fn restore(raw: Option<&str>, peer: &str) -> Option<TraceContext> {
    let raw = raw?;
    let ctx = decode(raw)?;

    tracing::Span::current().record("restored_trace_parent", raw);
    tracing::info!(peer, "{CALLER_MARKER}{peer}");
    tracing::info!(token = raw, "restored connection to broken trace");

    Some(ctx)
}
