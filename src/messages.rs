// User-facing texts shown by the views.

pub const LOGIN_FAILED: &str = "Erro no login";
pub const CONNECTION_FAILED: &str = "Erro ao conectar ao servidor.";
pub const BOOK_NOT_FOUND: &str = "Livro não encontrado.";
pub const GENRE_COUNT_REQUIRED: &str = "Você deve selecionar exatamente 3 gêneros.";
pub const RECOMMENDATIONS_HEADING: &str = "Recomendações:";
pub const BOOK_ADDED: &str = "Livro adicionado com sucesso!";
pub const BOOK_ADD_FAILED: &str = "Erro ao adicionar livro.";
pub const BOOK_REMOVED: &str = "Livro removido com sucesso!";
pub const BOOK_REMOVE_FAILED: &str = "Erro ao remover livro.";
