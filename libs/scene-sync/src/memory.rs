//! In-memory render scene.

use crate::backend::{RenderBackend, RenderPrimitive};
use std::convert::Infallible;

/// A render scene held in memory, used headless and in tests.
///
/// Reference primitives added with [`MemoryBackend::add_reference`] survive
/// [`RenderBackend::remove_all_generated_primitives`].
#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
    references: Vec<RenderPrimitive>,
    generated: Vec<RenderPrimitive>,
    redraws: usize,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads a primitive that is not owned by the synchronizer.
    pub fn add_reference(&mut self, primitive: RenderPrimitive) {
        self.references.push(primitive);
    }

    pub fn references(&self) -> &[RenderPrimitive] {
        &self.references
    }

    /// Generated primitives in the order they were added.
    pub fn primitives(&self) -> &[RenderPrimitive] {
        &self.generated
    }

    pub fn primitive(&self, index: usize) -> Option<&RenderPrimitive> {
        self.generated.get(index)
    }

    pub fn redraw_count(&self) -> usize {
        self.redraws
    }
}

impl RenderBackend for MemoryBackend {
    type Error = Infallible;

    async fn remove_all_generated_primitives(&mut self) -> Result<(), Self::Error> {
        self.generated.clear();
        Ok(())
    }

    async fn add_primitive(&mut self, primitive: RenderPrimitive) -> Result<(), Self::Error> {
        self.generated.push(primitive);
        Ok(())
    }

    async fn request_redraw(&mut self) -> Result<(), Self::Error> {
        self.redraws += 1;
        Ok(())
    }
}
