pub mod comp;
pub mod error;
pub mod link;
pub mod sim;
pub mod topo;

#[cfg(test)]
mod test;
