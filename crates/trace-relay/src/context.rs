use rand::Rng;
use serde::{Deserialize, Serialize};

/// The pair of identifiers a tracing system uses to correlate related
/// operations across services.
///
/// Owned by the calling process for the duration of one request; the
/// relay codec only ever serializes a snapshot of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TraceContext {
    /// 128-bit trace identifier.
    pub trace_id: u128,
    /// 64-bit span identifier.
    pub span_id: u64,
}

impl TraceContext {
    /// Creates a context from raw identifier values.
    pub fn new(trace_id: u128, span_id: u64) -> Self {
        Self { trace_id, span_id }
    }

    /// Generates a fresh root context from the given random source.
    pub fn generate<R: Rng>(rng: &mut R) -> Self {
        Self {
            trace_id: rng.gen_range(1..=u128::MAX),
            span_id: rng.gen_range(1..=u64::MAX),
        }
    }

    /// The trace identifier as 32 lowercase hex characters.
    pub fn trace_id_hex(&self) -> String {
        format!("{:032x}", self.trace_id)
    }

    /// The span identifier as 16 lowercase hex characters.
    pub fn span_id_hex(&self) -> String {
        format!("{:016x}", self.span_id)
    }
}

impl std::fmt::Display for TraceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.trace_id_hex(), self.span_id_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn hex_forms_are_zero_padded() {
        let ctx = TraceContext::new(0x4bf9, 0xf0);
        assert_eq!(ctx.trace_id_hex(), "00000000000000000000000000004bf9");
        assert_eq!(ctx.span_id_hex(), "00000000000000f0");
    }

    #[test]
    fn generate_produces_distinct_nonzero_contexts() {
        let mut rng = StdRng::seed_from_u64(3);
        let a = TraceContext::generate(&mut rng);
        let b = TraceContext::generate(&mut rng);
        assert_ne!(a, b);
        assert_ne!(a.trace_id, 0);
        assert_ne!(a.span_id, 0);
    }

    #[test]
    fn serialization_roundtrip() {
        let ctx = TraceContext::new(42, 7);
        let json = serde_json::to_string(&ctx).unwrap();
        let back: TraceContext = serde_json::from_str(&json).unwrap();
        assert_eq!(ctx, back);
    }
}
