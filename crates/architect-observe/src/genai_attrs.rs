//! OpenTelemetry GenAI semantic-convention attribute names.
//!
//! Usable as field names in `tracing` spans around remote generation calls.

/// The name of the operation being performed.
pub const GEN_AI_OPERATION_NAME: &str = "gen_ai.operation.name";

/// The GenAI provider (e.g., "gemini").
pub const GEN_AI_PROVIDER_NAME: &str = "gen_ai.provider.name";

/// The model ID requested.
pub const GEN_AI_REQUEST_MODEL: &str = "gen_ai.request.model";

pub const GEN_AI_USAGE_INPUT_TOKENS: &str = "gen_ai.usage.input_tokens";

pub const GEN_AI_USAGE_OUTPUT_TOKENS: &str = "gen_ai.usage.output_tokens";

/// The finish reason of the first candidate (e.g., "STOP").
pub const GEN_AI_RESPONSE_FINISH_REASONS: &str = "gen_ai.response.finish_reasons";

// --- Operation name values ---

/// Structured build request.
pub const OP_GENERATE_BUILD: &str = "generate_build";

/// Illustration request.
pub const OP_GENERATE_ILLUSTRATION: &str = "generate_illustration";

// --- Provider name values ---

pub const PROVIDER_GEMINI: &str = "gemini";
