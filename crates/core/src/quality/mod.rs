pub mod face_size;
pub mod gate;
pub mod head_pose;
pub mod lighting;
