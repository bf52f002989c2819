
mod buildings;
mod route;
