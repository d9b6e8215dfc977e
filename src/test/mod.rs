mod kernel;
mod link_table;
mod params;
mod topo_spec;
mod vote;
