//! Application services for work board orchestration.

mod boards;

pub use boards::{
    BoardDetail, BoardService, BoardServiceError, BoardServiceResult, CreateBoardRequest,
    NewTaskRequest, UpdateBoardRequest,
};
