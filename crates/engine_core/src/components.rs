//! Common ECS components.

/// Tag component for collectible orbs scattered over the field.
///
/// Liveness is implicit in membership: a collected orb is despawned, never
/// flagged. The set of entities carrying this tag only shrinks.
#[derive(Debug, Clone, Copy, Default)]
pub struct Pickup;

/// Mesh reference component - links an entity to renderer-side geometry.
///
/// The renderer collaborator creates the mesh when the entity spawns and
/// disposes of it when the entity is despawned; the simulation only carries
/// the handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MeshInstance {
    pub mesh_id: u32,
    pub material_id: u32,
}

impl MeshInstance {
    pub fn new(mesh_id: u32, material_id: u32) -> Self {
        Self {
            mesh_id,
            material_id,
        }
    }
}

impl Default for MeshInstance {
    fn default() -> Self {
        Self {
            mesh_id: 0,
            material_id: 0,
        }
    }
}
