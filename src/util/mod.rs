//! Browser helpers kept apart from components so the component tree stays
//! renderable on the server.

pub mod dark_mode;
