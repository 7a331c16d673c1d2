#[cfg(test)]
pub mod impl_fake;
pub mod impl_texture;
pub mod interface;
