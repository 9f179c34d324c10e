// Integration tests for the host-facing component and its configuration

#[cfg(test)]
mod tests {
    use fiveaxis_kins::{
        create_kinematics, load_config, Component, Config, FiveAxisKinematics, JointVector,
        Kinematics, KinematicsFlags, KinematicsType, KinsParams, DEFAULT_COMPONENT_NAME,
    };
    use std::fs::File;
    use std::io::Write;
    use std::thread;
    use tempfile::tempdir;

    fn component_from(config: &Config) -> Component {
        let kins = create_kinematics(&config.kinematics.module).unwrap();
        Component::new(DEFAULT_COMPONENT_NAME, kins, config.kinematics.params()).unwrap()
    }

    #[test]
    fn test_component_from_config_file() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("kins.toml");
        let mut file = File::create(&file_path).unwrap();
        writeln!(file, "[kinematics]\nmodule = '5axiskins'\npivot_length = 100.0\ntool_length = 10.0").unwrap();
        file.flush().unwrap();

        let config = load_config(file_path.to_str().unwrap()).unwrap();
        let comp = component_from(&config);
        assert_eq!(comp.get("5axiskins.pivot-length").unwrap(), 100.0);
        assert_eq!(comp.get("5axiskins.tooloffset.z").unwrap(), 10.0);

        // Tilt 90: head horizontal, radius 100 + 10 - 0
        let joints = JointVector { tilt: 90.0, ..Default::default() };
        let pose = comp.forward(&joints).unwrap();
        assert!((pose.tran.x - 110.0).abs() < 1e-9);
        assert!((pose.tran.z - 110.0).abs() < 1e-9);
    }

    #[test]
    fn test_component_matches_direct_transform() {
        let comp = component_from(&Config::default());
        comp.set_pin("5axiskins.tooloffset.z", 22.0).unwrap();
        let params = KinsParams { pivot_length: 250.0, tool_length: 22.0 };

        let joints = JointVector::from([1.0, 2.0, 3.0, 40.0, 5.0, 60.0, 7.0, 8.0, 9.0]);
        let pose = comp.forward(&joints).unwrap();
        assert_eq!(pose, FiveAxisKinematics.forward(&joints, &params));
        assert_eq!(comp.inverse(&pose).unwrap(), FiveAxisKinematics.inverse(&pose, &params));

        let mut flags = KinematicsFlags { forward: 1, inverse: 1 };
        assert_eq!(comp.home(&joints, &mut flags).unwrap(), pose);
        assert_eq!(flags, KinematicsFlags::default());
        assert_eq!(comp.kinematics_type(), KinematicsType::Both);
    }

    #[test]
    fn test_pivot_change_between_cycles() {
        let comp = component_from(&Config::default());
        let joints = JointVector { tilt: 90.0, ..Default::default() };
        let x0 = comp.forward(&joints).unwrap().tran.x;
        comp.set_param("5axiskins.pivot-length", 200.0).unwrap();
        let x1 = comp.forward(&joints).unwrap().tran.x;
        assert!((x0 - 250.0).abs() < 1e-9);
        assert!((x1 - 200.0).abs() < 1e-9);
    }

    #[test]
    fn test_handle_writes_from_host_thread() {
        let comp = component_from(&Config::default());
        let handle = comp.handle();
        let writer = thread::spawn(move || {
            for i in 0..=100 {
                handle.set_tool_length(i as f64).unwrap();
            }
        });
        writer.join().unwrap();
        let snap = comp.snapshot().unwrap();
        assert_eq!(snap.tool_length, 100.0);
        assert_eq!(snap.pivot_length, 250.0);
    }

    #[test]
    fn test_unknown_module() {
        let mut config = Config::default();
        config.kinematics.module = "trivkins".to_string();
        assert!(create_kinematics(&config.kinematics.module).is_err());
    }

    #[test]
    fn test_boxed_kinematics_type() {
        let kins: Box<dyn Kinematics> = create_kinematics("5axiskins").unwrap();
        assert_eq!(kins.kinematics_type(), KinematicsType::Both);
    }
}
