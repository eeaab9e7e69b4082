pub mod util;

#[cfg(test)]
mod super_ellipsoid;
#[cfg(test)]
mod mutation;
