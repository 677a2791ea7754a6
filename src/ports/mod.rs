mod console_chat_port;

pub use console_chat_port::ConsoleChatPort;
