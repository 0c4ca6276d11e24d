//! Inner computational kernels.
//!
//! Every multiplication strategy funnels through the same column kernel,
//! which is what makes their outputs comparable bit for bit.

pub mod column;
