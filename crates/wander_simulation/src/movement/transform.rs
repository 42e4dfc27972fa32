//! Узкий интерфейс к transform агента.
//!
//! Wander логике нужны только forward/up оси, позиция и поворот вокруг оси.
//! Scene graph движка за этим трейтом не виден.

use bevy::prelude::*;

pub trait AgentTransform {
    fn forward_vector(&self) -> Vec3;
    fn up_vector(&self) -> Vec3;
    fn position(&self) -> Vec3;
    fn set_position(&mut self, position: Vec3);

    /// Поворот на месте вокруг `axis` (world space) на `degrees` градусов.
    fn rotate_degrees(&mut self, axis: Vec3, degrees: f32);

    fn translate(&mut self, offset: Vec3) {
        let position = self.position();
        self.set_position(position + offset);
    }
}

impl AgentTransform for Transform {
    fn forward_vector(&self) -> Vec3 {
        Transform::forward(self).as_vec3()
    }

    fn up_vector(&self) -> Vec3 {
        Transform::up(self).as_vec3()
    }

    fn position(&self) -> Vec3 {
        self.translation
    }

    fn set_position(&mut self, position: Vec3) {
        self.translation = position;
    }

    fn rotate_degrees(&mut self, axis: Vec3, degrees: f32) {
        // Нулевая ось — нечего вращать
        let Some(axis) = axis.try_normalize() else {
            return;
        };
        self.rotate(Quat::from_axis_angle(axis, degrees.to_radians()));
        // Тысячи мелких поворотов за жизнь агента: держим quat единичным
        self.rotation = self.rotation.normalize();
    }
}
