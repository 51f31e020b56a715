mod chart;
mod indices;
