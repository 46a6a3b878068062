//! RDAP support: bootstrap registry loading, authority resolution and the
//! data client that fetches registration objects.

pub mod authority;
pub mod bootstrap;
pub mod client;

pub use authority::{AuthorityIndex, AuthorityIndexBuilder};
pub use bootstrap::{load_registry, load_registry_file, ServiceEntry};
pub use client::RdapClient;
