//! Error kinds produced by catalog operations

use thiserror::Error;

/// A lookup that came back empty. Each variant has a fixed, client-safe
/// message and the payload key the API reports it under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotFound {
    Page,
    Movie,
    SearchResults,
    Genre,
    Actor,
    ActorSearch,
    ActorToRename,
    ActorToRemove,
    ParticipationActor,
    ParticipationMovie,
    Participation,
}

impl NotFound {
    pub fn message(&self) -> &'static str {
        match self {
            NotFound::Page => "404: Página não encontrada.",
            NotFound::Movie => "404: Filme com ID especificado não encontrado.",
            NotFound::SearchResults => "Nenhum resultado para sua busca.",
            NotFound::Genre => "404: Gênero pesquisado não existe.",
            NotFound::Actor => "ID do ator não encontrado.",
            NotFound::ActorSearch => "Nenhum ator encontrado na busca.",
            NotFound::ActorToRename => "404: ID informado não encontrado para modificação.",
            NotFound::ActorToRemove => "ID não encontrado para remoção.",
            NotFound::ParticipationActor => "404: Ator com ID especificado não encontrado.",
            NotFound::ParticipationMovie => "404: Filme com ID especificado não encontrado.",
            NotFound::Participation => "Tupla não encontrada para remoção.",
        }
    }

    /// Actor lookups report under `msg`, everything else under `error_msg`
    pub fn payload_key(&self) -> &'static str {
        match self {
            NotFound::Actor | NotFound::ActorSearch => "msg",
            _ => "error_msg",
        }
    }
}

/// The store operation that failed, used to pick the generic message shown
/// to the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreAction {
    Read,
    CreateActor,
    RenameActor,
    DeleteActor,
    CreateParticipation,
    DeleteParticipation,
}

impl StoreAction {
    pub fn public_message(&self) -> &'static str {
        match self {
            StoreAction::Read => "Algo deu errado. Tente novamente mais tarde.",
            StoreAction::CreateActor => "Não foi possível adicionar o ator.",
            StoreAction::RenameActor => "Não foi possível alterar o ator. Tente novamente mais tarde.",
            StoreAction::DeleteActor => "Não foi possível remover o ator. Tente novamente mais tarde.",
            StoreAction::CreateParticipation => "Não foi possível adicionar a participação.",
            StoreAction::DeleteParticipation => "Não foi possível remover a participação.",
        }
    }
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("{}", .0.message())]
    NotFound(NotFound),

    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Conflict(String),

    /// A row disappeared between lookup and write
    #[error("integrity violation: {0}")]
    Integrity(String),

    #[error("store failure during {action:?}: {source}")]
    Store {
        action: StoreAction,
        #[source]
        source: sqlx::Error,
    },
}

impl CatalogError {
    pub fn validation(msg: impl Into<String>) -> Self {
        CatalogError::Validation(msg.into())
    }

    /// Adapter for `map_err` that tags a store error with its action
    pub fn store(action: StoreAction) -> impl FnOnce(sqlx::Error) -> Self {
        move |source| CatalogError::Store { action, source }
    }
}

pub type CatalogResult<T> = Result<T, CatalogError>;
