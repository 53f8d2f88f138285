use super::*;

mod crossref;
mod datacite;
