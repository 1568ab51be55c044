//! `vigil-checklist` — binds the fixed task ids of a checklist document to
//! their done markers, independent of the toolkit that renders it.

pub mod binder;
pub mod error;
pub mod memory;
pub mod surface;

pub use binder::{apply_marker, bind, BoundTask, Checklist, DONE_CLASS};
pub use error::{ChecklistError, Result};
pub use memory::{MemoryCheckbox, MemoryContainer, MemoryDocument};
pub use surface::{Checkable, ChecklistDocument, Markable};
