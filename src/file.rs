//! Loader for `.jdf` scenario definitions.
//!
//! A definition is a stream of whitespace-separated tokens, each either
//! `key=value` or a bare flag. Global keys may appear anywhere; `body` starts
//! a new body and every body key after it applies to that body. Keys that
//! only matter to a display (`scale`, `tilt`, `follow`, ...) are skipped.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::astro::KeplerElements;
use crate::error::ScenarioError;
use crate::math::Vec3;
use crate::nbody::Direction;
use crate::scenario::{BodySpec, Scenario, ScenarioParams};

const BODY_KEYS: &[&str] = &[
    "name", "mass", "size", "colour", "x", "y", "z", "vx", "vy", "vz", "central", "noorbit",
    "notrail", "aster", "a", "e", "incl", "node", "peri", "mean",
];

pub fn read_file(path: impl AsRef<Path>) -> Result<Scenario, ScenarioError> {
    let text = fs::read_to_string(path)?;
    parse_jdf(&text)
}

pub fn parse_jdf(text: &str) -> Result<Scenario, ScenarioError> {
    let mut params = ScenarioParams::default();
    let mut bodies: Vec<BodySpec> = Vec::new();
    let mut pending: Vec<PendingElements> = Vec::new();

    for token in text.split_whitespace() {
        let (key, value) = match token.split_once('=') {
            Some((key, value)) => (key, Some(value)),
            None => (token, None),
        };
        let number = || parse_number(key, value);

        match key {
            "vstep" => params.v_step = number()?,
            "showstep" => params.show_step = number()?,
            "sleep" => params.sleep = number()?,
            "fixed" => params.fixed = true,
            "julian" => {
                let jd = number()?;
                params.julian = if jd > 0.0 { Some(jd) } else { None };
            }
            "relativity" => params.relativity = true,
            "reverse" => params.direction = Direction::Backward,
            "body" => {
                bodies.push(BodySpec::new("", 0.0, Vec3::zeros(), Vec3::zeros()));
                pending.push(PendingElements::default());
            }
            _ if BODY_KEYS.contains(&key) => {
                let (body, elements) = match (bodies.last_mut(), pending.last_mut()) {
                    (Some(body), Some(elements)) => (body, elements),
                    _ => return Err(ScenarioError::KeyOutsideBody(key.to_owned())),
                };
                set_body_key(body, elements, key, value)?;
            }
            _ => debug!(key, "ignoring unrecognised key"),
        }
    }

    for (body, elements) in bodies.iter_mut().zip(pending) {
        body.elements = elements.finish(&body.name)?;
    }

    let mut scenario = Scenario::new(params, bodies);
    scenario.resolve_elements()?;
    debug!(bodies = scenario.bodies.len(), "loaded scenario");
    Ok(scenario)
}

fn set_body_key(
    body: &mut BodySpec,
    elements: &mut PendingElements,
    key: &str,
    value: Option<&str>,
) -> Result<(), ScenarioError> {
    let number = || parse_number(key, value);

    match key {
        "name" => body.name = value.unwrap_or_default().to_owned(),
        "colour" => body.colour = value.map(|hex| format!("#{}", hex)),
        "mass" => body.mass = number()?,
        "size" => body.size = number()?,
        "x" => body.position.x = number()?,
        "y" => body.position.y = number()?,
        "z" => body.position.z = number()?,
        "vx" => body.velocity.x = number()?,
        "vy" => body.velocity.y = number()?,
        "vz" => body.velocity.z = number()?,
        "central" => body.central = true,
        "noorbit" => body.orbit = false,
        "notrail" => body.trail = false,
        "aster" => body.aster = true,
        "a" => elements.a = Some(number()?),
        "e" => elements.e = Some(number()?),
        "incl" => elements.incl = Some(number()?),
        "node" => elements.node = Some(number()?),
        "peri" => elements.peri = Some(number()?),
        "mean" => elements.mean = Some(number()?),
        _ => unreachable!("{} is listed in BODY_KEYS", key),
    }
    Ok(())
}

fn parse_number(key: &str, value: Option<&str>) -> Result<f64, ScenarioError> {
    let value = value.unwrap_or_default();
    value.parse::<f64>().map_err(|_| ScenarioError::InvalidNumber {
        key: key.to_owned(),
        value: value.to_owned(),
    })
}

// Element keys as read, angles still in degrees
#[derive(Debug, Default)]
struct PendingElements {
    a: Option<f64>,
    e: Option<f64>,
    incl: Option<f64>,
    node: Option<f64>,
    peri: Option<f64>,
    mean: Option<f64>,
}

impl PendingElements {
    fn is_empty(&self) -> bool {
        [self.a, self.e, self.incl, self.node, self.peri, self.mean]
            .iter()
            .all(Option::is_none)
    }

    /// Shape and size are required; the angles default to zero.
    fn finish(self, name: &str) -> Result<Option<KeplerElements>, ScenarioError> {
        if self.is_empty() {
            return Ok(None);
        }

        let missing = |element| ScenarioError::MissingElement {
            name: name.to_owned(),
            element,
        };
        let angle = |degrees: Option<f64>| degrees.unwrap_or(0.0).to_radians();

        Ok(Some(KeplerElements {
            a: self.a.ok_or_else(|| missing("a"))?,
            e: self.e.ok_or_else(|| missing("e"))?,
            incl: angle(self.incl),
            node: angle(self.node),
            arg_peri: angle(self.peri),
            mean_anomaly: angle(self.mean),
        }))
    }
}
