#[derive(Debug)]
pub(crate) struct Config {
    pub listen_ip: String,
    pub listen_port: String,
    pub data_file: Option<String>,
}

impl Config {
    pub fn from_env() -> crate::Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup<F>(lookup: F) -> crate::Result<Self>
    where
        F: Fn(&'static str) -> Option<String>,
    {
        let required = |name| lookup(name).ok_or(crate::Error::Env(name));

        Ok(Self {
            listen_ip: required("LISTEN_IP")?,
            listen_port: required("LISTEN_PORT")?,
            data_file: lookup("DATA_FILE").filter(|x| !x.is_empty()),
        })
    }

    pub fn bind(&self) -> String {
        format!("{}:{}", self.listen_ip, self.listen_port)
    }
}
