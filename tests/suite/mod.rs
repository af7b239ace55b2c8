mod input;
mod navigation_flow;
