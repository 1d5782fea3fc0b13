use crate::{actor::Actor, render::Render};

/// Stable handle of an actor inside a stage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActorId(u32);

/// Stage
/// Ordered actor container driven by the host engine's frame loop:
/// one update and one draw per rendered frame, single threaded.
#[derive(Debug, Default)]
pub struct Stage {
    next_id: u32,
    actors: Vec<(ActorId, Actor)>,
}

impl Stage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, actor: Actor) -> ActorId {
        let id = ActorId(self.next_id);
        self.next_id += 1;
        self.actors.push((id, actor));
        id
    }

    pub fn get(&self, id: ActorId) -> Option<&Actor> {
        self.actors
            .iter()
            .find(|(aid, _)| *aid == id)
            .map(|(_, a)| a)
    }

    pub fn get_mut(&mut self, id: ActorId) -> Option<&mut Actor> {
        self.actors
            .iter_mut()
            .find(|(aid, _)| *aid == id)
            .map(|(_, a)| a)
    }

    pub fn remove(&mut self, id: ActorId) -> Option<Actor> {
        let idx = self.actors.iter().position(|(aid, _)| *aid == id)?;
        Some(self.actors.remove(idx).1)
    }

    pub fn len(&self) -> usize {
        self.actors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actors.is_empty()
    }

    pub fn clear(&mut self) {
        self.actors.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (ActorId, &Actor)> {
        self.actors.iter().map(|(id, a)| (*id, a))
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (ActorId, &mut Actor)> {
        self.actors.iter_mut().map(|(id, a)| (*id, a))
    }

    /// Advance every actor by one frame tick
    pub fn update(&mut self, tick: f32) {
        for (_, actor) in self.actors.iter_mut() {
            actor.advance(tick);
        }
    }

    /// Draw actors in ascending z order, insertion order for ties
    pub fn draw(&self, render: &mut dyn Render) {
        let mut order: Vec<&Actor> = self.actors.iter().map(|(_, a)| a).collect();
        order.sort_by_key(|a| a.z_index);
        for actor in order {
            actor.draw(render);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{handle::Handle, render::DrawCall, sprite::Sprite};
    use glam::{UVec2, Vec2};
    use std::sync::mpsc::channel;

    #[derive(Default)]
    struct RecordingRender {
        textures: Vec<u64>,
    }

    impl Render for RecordingRender {
        fn draw_image(&mut self, call: &DrawCall) {
            self.textures.push(call.texture.id());
        }
    }

    fn actor_with_texture(id: u64, z_index: u32) -> Actor {
        let (sender, receiver) = channel();
        std::mem::forget(receiver);
        let sprite = Sprite::new(Handle::new(id, sender), UVec2::new(8, 8));
        Actor::new(Vec2::ZERO, Vec2::splat(8.0))
            .with_sprite(sprite)
            .with_z_index(z_index)
    }

    #[test]
    fn test_draw_order() {
        let mut stage = Stage::new();
        stage.add(actor_with_texture(1, 5));
        stage.add(actor_with_texture(2, 0));
        stage.add(actor_with_texture(3, 5));

        let mut render = RecordingRender::default();
        stage.draw(&mut render);
        assert_eq!(render.textures, vec![2, 1, 3]);
    }

    #[test]
    fn test_invisible_actor_not_drawn() {
        let mut stage = Stage::new();
        let id = stage.add(actor_with_texture(1, 0));
        stage
            .get_mut(id)
            .expect("actor")
            .visible = false;

        let mut render = RecordingRender::default();
        stage.draw(&mut render);
        assert!(render.textures.is_empty());
    }

    #[test]
    fn test_add_remove() {
        let mut stage = Stage::new();
        let a = stage.add(actor_with_texture(1, 0));
        let b = stage.add(actor_with_texture(2, 0));
        assert_eq!(stage.len(), 2);
        assert!(stage.remove(a).is_some());
        assert!(stage.get(a).is_none());
        assert!(stage.get(b).is_some());
        assert!(stage.remove(a).is_none());
    }
}
