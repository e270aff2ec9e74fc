use crate::astro::OrbitalElements;
use crate::math::Vec3;

#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct BodyId(pub usize);

/// Exactly one body may be central; relativistic corrections and orbital
/// elements are all taken relative to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyRole {
    Central,
    Orbiting,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhaseState {
    pub position: Vec3,
    pub velocity: Vec3,
}

/// Relativistic mass (as G*m) and parameter, fixed at setup.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Relativistic {
    pub mass: f64,
    pub par: f64,
}

// All the immutable info about a body
#[derive(Debug, Clone)]
pub struct BodyInfo {
    pub name: String,
    /// Name shared by a family of clones, e.g. `2004MN4` for `2004MN4[3]`.
    pub base_name: String,
    pub is_clone: bool,
    pub colour: Option<String>,
    pub size: f64,
    /// Whether elements are computed (and the orbit drawn) for this body
    pub show_orbit: bool,
    pub show_trail: bool,
}

#[derive(Debug, Clone)]
pub struct Body {
    pub id: BodyId,
    pub info: BodyInfo,
    pub role: BodyRole,
    mass: f64,
    gmass: f64,
    /// P and V. Consistent with `acceleration` between sub-steps.
    pub current: PhaseState,
    /// nP and nV, the leapfrog scratch buffers.
    pub next: PhaseState,
    pub acceleration: Vec3,
    pub relativistic: Option<Relativistic>,
    pub elements: Option<OrbitalElements>,
}

impl PhaseState {
    pub fn new(position: Vec3, velocity: Vec3) -> Self {
        Self { position, velocity }
    }
}

impl BodyInfo {
    pub fn new(name: &str, is_clone: bool) -> Self {
        BodyInfo {
            name: name.to_owned(),
            base_name: clone_base_name(name, is_clone).to_owned(),
            is_clone,
            colour: None,
            size: 0.0,
            show_orbit: true,
            show_trail: true,
        }
    }
}

impl Body {
    pub fn new(id: BodyId, info: BodyInfo, role: BodyRole, mass: f64, g: f64, state: PhaseState) -> Self {
        Body {
            id,
            info,
            role,
            mass,
            gmass: mass * g,
            current: state,
            next: state,
            acceleration: Vec3::zeros(),
            relativistic: None,
            elements: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.info.name
    }

    /// Mass in solar masses
    pub fn mass(&self) -> f64 {
        self.mass
    }

    /// Mass times G
    pub fn gmass(&self) -> f64 {
        self.gmass
    }

    pub fn set_mass(&mut self, mass: f64, g: f64) {
        self.mass = mass;
        self.gmass = mass * g;
    }

    pub fn is_central(&self) -> bool {
        self.role == BodyRole::Central
    }

    pub fn position(&self) -> Vec3 {
        self.current.position
    }

    pub fn velocity(&self) -> Vec3 {
        self.current.velocity
    }

    /// Copies P and V into the scratch buffers.
    pub fn sync_next(&mut self) {
        self.next = self.current;
    }

    /// Weight used when finding the barycenter.
    pub fn barycentric_weight(&self, relativistic: bool) -> f64 {
        match (relativistic, self.relativistic) {
            (true, Some(rel)) => rel.mass,
            _ => self.gmass,
        }
    }
}

fn clone_base_name(name: &str, is_clone: bool) -> &str {
    match name.find('[') {
        Some(idx) if is_clone => &name[..idx],
        _ => name,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::NEWTON_G;

    #[test]
    fn test_clone_names() {
        let info = BodyInfo::new("2004MN4[3]", true);
        assert_eq!(info.base_name, "2004MN4");

        // Not flagged as a clone, so brackets are just part of the name
        let info = BodyInfo::new("Odd[name]", false);
        assert_eq!(info.base_name, "Odd[name]");

        let info = BodyInfo::new("Ceres", true);
        assert_eq!(info.base_name, "Ceres");
    }

    #[test]
    fn test_gmass_follows_mass() {
        let state = PhaseState::new(Vec3::x(), Vec3::y());
        let mut body = Body::new(BodyId(0), BodyInfo::new("Earth", false), BodyRole::Orbiting, 3e-6, NEWTON_G, state);
        assert_eq!(body.gmass(), 3e-6 * NEWTON_G);

        body.set_mass(1e-3, NEWTON_G);
        assert_eq!(body.mass(), 1e-3);
        assert_eq!(body.gmass(), 1e-3 * NEWTON_G);

        // Scratch buffers start out equal to the real state
        assert_eq!(body.next, body.current);
    }

    #[test]
    fn test_barycentric_weight() {
        let state = PhaseState::new(Vec3::x(), Vec3::y());
        let mut body = Body::new(BodyId(0), BodyInfo::new("Sun", false), BodyRole::Central, 1.0, NEWTON_G, state);
        assert_eq!(body.barycentric_weight(true), NEWTON_G);

        body.relativistic = Some(Relativistic { mass: 2.0, par: 0.0 });
        assert_eq!(body.barycentric_weight(true), 2.0);
        assert_eq!(body.barycentric_weight(false), NEWTON_G);
    }
}
