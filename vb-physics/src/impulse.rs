use crate::integrator::Physics;

/// Player-issued impulses. These only perturb velocity; the next
/// `advance` call consumes them. All of them are gated on ground
/// contact, so a mid-air caller is a no-op.
impl Physics {
    pub fn jump(&mut self) {
        if self.state.on_ground {
            self.state.on_ground = false;
            self.state.velocity.y += self.config.jump_accel;
        }
    }

    /// Walk toward `angle`, where zero faces +z. Degrees unless
    /// `radians` is set.
    pub fn walk(&mut self, angle: f64, radians: bool) {
        let accel = self.config.walk_accel;
        self.push(angle, radians, accel);
    }

    pub fn sprint(&mut self, angle: f64, radians: bool) {
        let accel = self.config.sprint_accel;
        self.push(angle, radians, accel);
    }

    fn push(&mut self, angle: f64, radians: bool, accel: f64) {
        if !self.state.on_ground {
            return;
        }
        let angle = if radians { angle } else { angle.to_radians() };
        self.state.velocity.x += angle.sin() * accel;
        self.state.velocity.z += angle.cos() * accel;
    }
}
