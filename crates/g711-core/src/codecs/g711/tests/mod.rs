//! G.711 unit test suite
