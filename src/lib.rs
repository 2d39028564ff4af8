//! Root crate facade for the SeqPaste server and core library.

pub use seqpaste_server::{
    config, create_app, db, error, handlers, models, resolve_bind_address, serve_router, service,
    AppError, AppState, Config, Database, ErrorKind, PasteService, ValidationError, DEFAULT_PORT,
};
