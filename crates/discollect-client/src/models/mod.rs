// SPDX-License-Identifier: GPL-3.0-or-later

//! Entities decoded from Discogs responses.
//!
//! Every field is optional and decoding never fails. Nested structures that
//! are not modelled here (images, labels, formats, ...) stay raw JSON objects.

mod artist;
mod community;
mod label;
mod master;
mod page;
mod release;
mod track;
mod user;

pub use artist::Artist;
pub use community::{Community, Rating};
pub use label::Label;
pub use master::MasterRelease;
pub use page::Page;
pub use release::Release;
pub use track::Track;
pub use user::User;
