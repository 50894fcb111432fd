// Resume pages: form intake feeding the renderer.
// Parsing lives in models::resume, templating and PDF conversion in render.

pub mod handlers;
