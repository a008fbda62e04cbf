use super::{ImportError, import_model};
use crate::graph::GraphModel;
use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};
use std::thread::{self, JoinHandle};

type ImportResult = Result<GraphModel, ImportError>;

/// 后台导入任务。
/// 结果只在完整建好图后一次性交付；丢弃任务即取消，线程结束后结果随之丢弃。
#[derive(Debug)]
pub struct ImportTask {
    receiver: Receiver<ImportResult>,
    /// 结果是否已被`try_take`取走
    taken: bool,
}

/// 在工作线程上解析并建图
pub fn spawn_import(bytes: Vec<u8>) -> Result<ImportTask, ImportError> {
    let (sender, receiver) = mpsc::channel();
    spawn_worker(bytes, sender)?;
    Ok(ImportTask {
        receiver,
        taken: false,
    })
}

/// 启动导入线程；线程返回值表示结果是否交付给了接收端
pub(super) fn spawn_worker(
    bytes: Vec<u8>,
    sender: Sender<ImportResult>,
) -> Result<JoinHandle<bool>, ImportError> {
    let handle = thread::Builder::new()
        .name("nn-lens-import".to_string())
        .spawn(move || {
            let result = import_model(&bytes);
            if sender.send(result).is_err() {
                log::debug!("导入任务已被丢弃，结果不再交付");
                return false;
            }
            true
        })?;
    Ok(handle)
}

impl ImportTask {
    /// 阻塞等待结果。结果已被`try_take`取走时返回`ImportError::Cancelled`
    pub fn wait(self) -> ImportResult {
        if self.taken {
            return Err(ImportError::Cancelled);
        }
        self.receiver.recv().map_err(|_| ImportError::Cancelled)?
    }

    /// 非阻塞地取结果。
    /// 尚未完成时返回None；结果只交付一次，取走之后再调用也返回None。
    pub fn try_take(&mut self) -> Option<ImportResult> {
        if self.taken {
            return None;
        }
        let result = match self.receiver.try_recv() {
            Ok(result) => result,
            Err(TryRecvError::Empty) => return None,
            Err(TryRecvError::Disconnected) => Err(ImportError::Cancelled),
        };
        self.taken = true;
        Some(result)
    }

    pub const fn is_taken(&self) -> bool {
        self.taken
    }
}
