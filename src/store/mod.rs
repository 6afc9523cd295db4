//! Remote store access (Supabase PostgREST).

pub mod supabase;

pub use supabase::StoreClient;
