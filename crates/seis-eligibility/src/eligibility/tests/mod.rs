mod combined;
mod common;
