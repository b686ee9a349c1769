// ============================================================================
// STATE MODULE - Sesión explícita + estado de UI
// ============================================================================

pub mod session_state;
pub mod view_state;
