use launcher_icons_core::Density;
use std::path::PathBuf;

pub const RES_DIR_ENV: &str = "LAUNCHER_ICONS_RES_DIR";
pub const DEFAULT_RES_DIR: &str = "app/src/main/res";
pub const ICON_STEM: &str = "ic_launcher_round";

// Resource root abstraction to make IO testable
pub trait ResProvider: Send + Sync {
    fn res_dir(&self) -> PathBuf;
}

/// The Android project's `res` directory, relative to the working directory
/// unless `LAUNCHER_ICONS_RES_DIR` points elsewhere.
#[derive(Default, Clone)]
pub struct ProjectResProvider;

impl ResProvider for ProjectResProvider {
    fn res_dir(&self) -> PathBuf {
        match std::env::var_os(RES_DIR_ENV) {
            Some(dir) if !dir.is_empty() => PathBuf::from(dir),
            _ => PathBuf::from(DEFAULT_RES_DIR),
        }
    }
}

pub fn mipmap_dir(cp: &dyn ResProvider, density: Density) -> PathBuf {
    cp.res_dir().join(density.mipmap_dir_name())
}

pub fn webp_path(cp: &dyn ResProvider, density: Density) -> PathBuf {
    mipmap_dir(cp, density).join(format!("{ICON_STEM}.webp"))
}

pub fn png_path(cp: &dyn ResProvider, density: Density) -> PathBuf {
    mipmap_dir(cp, density).join(format!("{ICON_STEM}.png"))
}

pub fn res_dir() -> PathBuf {
    ProjectResProvider.res_dir()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::path::Path;

    struct FixedProvider(PathBuf);

    impl ResProvider for FixedProvider {
        fn res_dir(&self) -> PathBuf {
            self.0.clone()
        }
    }

    #[test]
    fn paths_land_in_density_folders() {
        let cp = FixedProvider(PathBuf::from("/tmp/res"));
        assert_eq!(
            mipmap_dir(&cp, Density::Xhdpi),
            Path::new("/tmp/res/mipmap-xhdpi")
        );
        assert_eq!(
            webp_path(&cp, Density::Mdpi),
            Path::new("/tmp/res/mipmap-mdpi/ic_launcher_round.webp")
        );
        assert_eq!(
            png_path(&cp, Density::Xxxhdpi),
            Path::new("/tmp/res/mipmap-xxxhdpi/ic_launcher_round.png")
        );
    }

    #[test]
    fn every_density_has_its_own_output() {
        let cp = FixedProvider(PathBuf::from("res"));
        let mut outputs: Vec<PathBuf> = Density::ALL.iter().map(|d| png_path(&cp, *d)).collect();
        outputs.sort();
        outputs.dedup();
        assert_eq!(outputs.len(), Density::ALL.len());
    }

    #[test]
    #[serial]
    fn project_default_and_env_override() {
        unsafe { std::env::remove_var(RES_DIR_ENV) };
        assert_eq!(res_dir(), Path::new(DEFAULT_RES_DIR));

        unsafe { std::env::set_var(RES_DIR_ENV, "/opt/android/res") };
        assert_eq!(res_dir(), Path::new("/opt/android/res"));

        unsafe { std::env::set_var(RES_DIR_ENV, "") };
        assert_eq!(res_dir(), Path::new(DEFAULT_RES_DIR));

        unsafe { std::env::remove_var(RES_DIR_ENV) };
    }
}
