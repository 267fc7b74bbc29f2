//! Fixed user-facing strings, in the service's own locale (pt-BR).
//!
//! The backend emits its error bodies in Portuguese, so the client keeps
//! its local messages consistent with them.

pub const EMPTY_URL: &str = "Por favor, insira uma URL";
pub const INVALID_URL: &str = "Por favor, insira uma URL válida";
pub const NETWORK_ERROR: &str = "Erro de conexão. Verifique sua internet.";
pub const COPIED: &str = "Copiado para a área de transferência!";
pub const COPY_ERROR: &str = "Erro ao copiar. Tente novamente.";
pub const INVALID_DATE: &str = "Data inválida";
