use glam::DVec3;
use landform_common::{JitterSource, Rgb};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Simulation constants for the particle box.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DynamicsConfig {
    /// Downward acceleration applied to the Y velocity each second.
    pub gravity: f64,
    /// Velocity fraction retained per second of drag (raised to dt).
    pub friction: f64,
    /// Velocity fraction retained after a wall impact.
    pub restitution: f64,
    /// Half-width of the cubic box; walls sit at +-half_extent on each axis.
    pub half_extent: f64,
}

impl Default for DynamicsConfig {
    fn default() -> Self {
        Self {
            gravity: 50.0,
            friction: 0.95,
            restitution: 0.95,
            half_extent: 60.0,
        }
    }
}

/// One sphere in the system.
#[derive(Debug, Clone, Copy)]
pub struct Particle {
    pub position: DVec3,
    pub velocity: DVec3,
    pub radius: f64,
    pub mass: f64,
    pub color: Rgb,
}

/// A set of spheres bouncing inside a cubic box.
///
/// Each step integrates positions, reflects spheres off the six walls with
/// restitution and mirrored penetration correction, then applies drag and
/// gravity to velocities.
#[derive(Debug, Clone)]
pub struct ParticleSystem {
    config: DynamicsConfig,
    particles: Vec<Particle>,
}

impl ParticleSystem {
    pub fn new(config: DynamicsConfig) -> Self {
        Self {
            config,
            particles: Vec::new(),
        }
    }

    pub fn config(&self) -> &DynamicsConfig {
        &self.config
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Remove all spheres.
    pub fn clear(&mut self) {
        self.particles.clear();
    }

    /// Add a sphere with explicit state.
    pub fn push(&mut self, particle: Particle) {
        self.particles.push(particle);
    }

    /// Spawn one sphere with randomized position, velocity, radius, and
    /// color. Mass is the radius cubed.
    pub fn spawn<J: JitterSource>(&mut self, jitter: &mut J) -> Particle {
        let h = self.config.half_extent;
        let position = DVec3::new(
            jitter.next_range(-h / 1.2, h / 1.2),
            jitter.next_range(-h / 1.2, h / 1.2),
            jitter.next_range(-h / 1.2, h / 1.2),
        );
        let velocity = DVec3::new(
            jitter.next_range(-100.0, 100.0),
            jitter.next_range(-100.0, 100.0),
            jitter.next_range(-100.0, 100.0),
        );
        let radius = jitter.next_range(1.0, 6.0);
        let color = Rgb::new(jitter.next_unit(), jitter.next_unit(), jitter.next_unit());
        let particle = Particle {
            position,
            velocity,
            radius,
            mass: radius.powi(3),
            color,
        };
        self.particles.push(particle);
        debug!(count = self.particles.len(), "spawned sphere");
        particle
    }

    /// Spawn `n` randomized spheres.
    pub fn spawn_many<J: JitterSource>(&mut self, n: usize, jitter: &mut J) {
        for _ in 0..n {
            self.spawn(jitter);
        }
    }

    /// Advance the simulation by `dt` seconds.
    pub fn step(&mut self, dt: f64) {
        let half = self.config.half_extent;
        let drag = self.config.friction.powf(dt);
        let bounce = self.config.restitution;

        for p in &mut self.particles {
            let mut pos = (p.position + p.velocity * dt).to_array();
            let mut vel = p.velocity.to_array();

            // Per-axis wall response: mirror the penetration back inside the
            // box and reflect the velocity component.
            for axis in 0..3 {
                let r = p.radius;
                if pos[axis] + r > half {
                    pos[axis] = half - ((pos[axis] + r) - half) - r;
                    vel[axis] = -bounce * vel[axis];
                } else if pos[axis] - r < -half {
                    pos[axis] = -half - ((pos[axis] - r) + half) + r;
                    vel[axis] = -bounce * vel[axis];
                }
            }

            vel[0] *= drag;
            vel[1] = vel[1] * drag - self.config.gravity * dt;
            vel[2] *= drag;

            p.position = DVec3::from_array(pos);
            p.velocity = DVec3::from_array(vel);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use landform_common::SplitMix64;

    fn resting_particle(position: DVec3, velocity: DVec3) -> Particle {
        Particle {
            position,
            velocity,
            radius: 1.0,
            mass: 1.0,
            color: Rgb::BLACK,
        }
    }

    fn inside_box(p: &Particle, half: f64) -> bool {
        p.position.to_array().iter().all(|&c| {
            c + p.radius <= half + 1e-9 && c - p.radius >= -half - 1e-9
        })
    }

    #[test]
    fn spheres_never_escape_the_box() {
        let mut system = ParticleSystem::new(DynamicsConfig::default());
        system.spawn_many(20, &mut SplitMix64::new(42));
        for _ in 0..2_000 {
            system.step(1.0 / 60.0);
            for p in system.particles() {
                assert!(inside_box(p, system.config().half_extent), "escaped: {p:?}");
            }
        }
    }

    #[test]
    fn wall_impact_reflects_velocity() {
        let config = DynamicsConfig {
            gravity: 0.0,
            friction: 1.0,
            ..DynamicsConfig::default()
        };
        let mut system = ParticleSystem::new(config);
        system.push(resting_particle(
            DVec3::new(58.5, 0.0, 0.0),
            DVec3::new(10.0, 0.0, 0.0),
        ));
        system.step(0.1);
        let p = &system.particles()[0];
        // Crossed the wall at x=60 with radius 1: reflected and damped.
        assert!(p.velocity.x < 0.0);
        assert!((p.velocity.x + 9.5).abs() < 1e-9);
        assert!(p.position.x + p.radius <= 60.0);
    }

    #[test]
    fn penetration_is_mirrored_back_inside() {
        let config = DynamicsConfig {
            gravity: 0.0,
            friction: 1.0,
            ..DynamicsConfig::default()
        };
        let mut system = ParticleSystem::new(config);
        system.push(resting_particle(
            DVec3::new(0.0, -58.5, 0.0),
            DVec3::new(0.0, -10.0, 0.0),
        ));
        system.step(0.1);
        let p = &system.particles()[0];
        // Would have reached y=-59.5 (sphere edge at -60.5, 0.5 deep);
        // the overshoot reflects to an edge 0.5 inside the wall.
        assert!((p.position.y - (-58.5)).abs() < 1e-9);
        assert!(p.velocity.y > 0.0);
    }

    #[test]
    fn gravity_pulls_velocity_down() {
        let config = DynamicsConfig {
            friction: 1.0,
            ..DynamicsConfig::default()
        };
        let mut system = ParticleSystem::new(config);
        system.push(resting_particle(DVec3::ZERO, DVec3::ZERO));
        system.step(0.5);
        assert_eq!(system.particles()[0].velocity.y, -25.0);
    }

    #[test]
    fn drag_decays_speed_exponentially() {
        let config = DynamicsConfig {
            gravity: 0.0,
            ..DynamicsConfig::default()
        };
        let mut system = ParticleSystem::new(config);
        system.push(resting_particle(DVec3::ZERO, DVec3::new(10.0, 0.0, 10.0)));
        system.step(1.0);
        let v = system.particles()[0].velocity;
        assert!((v.x - 9.5).abs() < 1e-9);
        assert!((v.z - 9.5).abs() < 1e-9);
    }

    #[test]
    fn spawn_assigns_mass_from_radius() {
        let mut system = ParticleSystem::new(DynamicsConfig::default());
        let p = system.spawn(&mut SplitMix64::new(7));
        assert!((p.mass - p.radius.powi(3)).abs() < 1e-12);
        assert!((1.0..6.0).contains(&p.radius));
    }

    #[test]
    fn clear_empties_the_system() {
        let mut system = ParticleSystem::new(DynamicsConfig::default());
        system.spawn_many(5, &mut SplitMix64::new(1));
        assert_eq!(system.len(), 5);
        system.clear();
        assert!(system.is_empty());
    }
}
