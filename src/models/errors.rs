use thiserror::Error;

/// Why a row was routed to the failure output.
///
/// Variants are declared in the order they are reported.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Error)]
pub enum RejectionReason {
    #[error("Agencia vazia")]
    EmptyBranch,
    #[error("Conta vazia")]
    EmptyAccount,
    #[error("Saldo vazio")]
    EmptyBalance,
    #[error("Falha na atualizacao")]
    UpdateFailed
}
