//! # NN Lens
//!
//! `nn_lens`用于查看已训练好的神经网络：导入序列化的模型描述，
//! 按广度优先把各层排成自上而下的节点图，并可在卷积层上拖入一张图像，
//! 预览每个滤波器作用在图像各通道上的结果。
//!

pub mod config;
pub mod errors;
pub mod graph;
pub mod import;
pub mod preview;
pub mod tensor;
pub mod utils;
pub mod vision;
