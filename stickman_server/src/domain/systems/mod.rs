// Cross-entity rules applied once per frame.

pub mod collisions;
