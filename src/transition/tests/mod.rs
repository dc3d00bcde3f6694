mod gestures;
mod support;
